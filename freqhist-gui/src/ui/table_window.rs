//! Frequency table window rendering.

use eframe::egui;
use freqhist_core::BarOrder;

use crate::app::FreqhistApp;
use crate::util::format_number;

impl FreqhistApp {
    /// Render the frequency table window (if visible).
    pub(crate) fn render_table_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_table {
            return;
        }

        let mut open = true;
        egui::Window::new("Frequency Table")
            .open(&mut open)
            .default_width(260.0)
            .show(ctx, |ui| {
                let Some(map) = self.frequencies.as_ref() else {
                    ui.label("No Data");
                    return;
                };

                let entries = match self.chart_config.order {
                    BarOrder::FirstSeen => map.iter().collect(),
                    BarOrder::Value => map.sorted_by_key(),
                    BarOrder::Count => map.sorted_by_count(),
                };

                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("frequency_table")
                        .striped(true)
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.strong(&self.chart_config.x_label);
                            ui.strong(&self.chart_config.y_label);
                            ui.end_row();
                            for (value, count) in entries {
                                ui.label(value.to_string());
                                ui.label(format_number(count));
                                ui.end_row();
                            }
                        });
                });
            });

        self.ui_state.show_table = open;
    }
}
