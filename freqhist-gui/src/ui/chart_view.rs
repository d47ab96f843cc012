//! Central panel with the frequency bar chart.

use eframe::egui;
use egui_plot::{Bar, BarChart as PlotBarChart, GridMark, Plot};
use freqhist_core::{AxisKind, BarChart};

use super::theme::BAR_FILL;
use crate::app::FreqhistApp;
use crate::util::u64_to_f64;

impl FreqhistApp {
    /// Render the central panel with the bar chart.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(chart) = &self.chart {
                ui.vertical_centered(|ui| ui.heading(&chart.title));
                show_chart(ui, chart);
            } else if self.processing.is_loading {
                ui.centered_and_justified(|ui| ui.spinner());
            } else {
                ui.centered_and_justified(|ui| ui.label("No Data"));
            }
        });
    }
}

/// Draws `chart` into the remaining space of `ui`.
fn show_chart(ui: &mut egui::Ui, chart: &BarChart) {
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|b| {
            Bar::new(b.position, u64_to_f64(b.height))
                .width(chart.bar_width)
                .fill(BAR_FILL)
                .name(&b.label)
        })
        .collect();

    let mut plot = Plot::new("frequency_chart")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .include_y(0.0)
        .include_y(u64_to_f64(chart.max_height().max(1)));

    if let Some((lo, hi)) = chart.x_range() {
        plot = plot.include_x(lo).include_x(hi);
    }

    if chart.axis == AxisKind::Categorical {
        let labeled = chart.clone();
        plot = plot.x_axis_formatter(move |mark: GridMark, _range| {
            labeled
                .tick_label(mark.value)
                .map(str::to_string)
                .unwrap_or_default()
        });
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(PlotBarChart::new(bars).name(&chart.y_label));
    });
}
