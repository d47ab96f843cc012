//! Control panel (left sidebar) rendering.

use eframe::egui;
use freqhist_core::{BarOrder, ValueKind};
use freqhist_io::InputFormat;
use rfd::FileDialog;

use super::theme::{ACCENT, ERROR};
use crate::app::FreqhistApp;
use crate::util::format_number;

const FORMATS: [(Option<InputFormat>, &str); 4] = [
    (None, "From extension"),
    (Some(InputFormat::Tokens), "Tokens"),
    (Some(InputFormat::Lines), "Lines"),
    (Some(InputFormat::Json), "JSON array"),
];

const KINDS: [ValueKind; 4] = [
    ValueKind::Auto,
    ValueKind::Integer,
    ValueKind::Float,
    ValueKind::Text,
];

const ORDERS: [BarOrder; 3] = [BarOrder::FirstSeen, BarOrder::Value, BarOrder::Count];

impl FreqhistApp {
    /// Render the left sidebar.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .exact_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("freqhist");
                ui.separator();

                self.render_input_section(ui);
                ui.separator();
                self.render_chart_section(ui);
                ui.separator();
                self.render_statistics(ui);

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    let color = if self.processing.status_text.starts_with("Error") {
                        ERROR
                    } else {
                        ui.visuals().weak_text_color()
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.processing.status_text).color(color),
                        )
                        .wrap(),
                    );
                });
            });
    }

    fn render_input_section(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("INPUT").small().strong());

        let can_load = !self.processing.is_loading;
        if ui
            .add_enabled(can_load, egui::Button::new("Open file..."))
            .clicked()
        {
            if let Some(path) = FileDialog::new()
                .add_filter("Values", &["txt", "csv", "json"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                self.load_file(path);
            }
        }

        if let Some(name) = self
            .selected_file
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
        {
            ui.label(egui::RichText::new(name).color(ACCENT));
        }

        let mut reload = false;
        let format_text = FORMATS
            .iter()
            .find(|(f, _)| *f == self.input_format)
            .map_or("From extension", |(_, name)| *name);
        ui.add_enabled_ui(can_load, |ui| {
            egui::ComboBox::from_label("Format")
                .selected_text(format_text)
                .show_ui(ui, |ui| {
                    for (format, name) in FORMATS {
                        reload |= ui
                            .selectable_value(&mut self.input_format, format, name)
                            .changed();
                    }
                });

            egui::ComboBox::from_label("Kind")
                .selected_text(self.value_kind.name())
                .show_ui(ui, |ui| {
                    for kind in KINDS {
                        reload |= ui
                            .selectable_value(&mut self.value_kind, kind, kind.name())
                            .changed();
                    }
                });
        });

        if reload {
            self.request_reload();
        }
    }

    fn render_chart_section(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("CHART").small().strong());

        let mut changed = false;
        let config = &mut self.chart_config;

        egui::Grid::new("chart_labels").num_columns(2).show(ui, |ui| {
            ui.label("Title");
            changed |= ui.text_edit_singleline(&mut config.title).changed();
            ui.end_row();
            ui.label("X label");
            changed |= ui.text_edit_singleline(&mut config.x_label).changed();
            ui.end_row();
            ui.label("Y label");
            changed |= ui.text_edit_singleline(&mut config.y_label).changed();
            ui.end_row();
        });

        egui::ComboBox::from_label("Order")
            .selected_text(config.order.to_string())
            .show_ui(ui, |ui| {
                for order in ORDERS {
                    changed |= ui
                        .selectable_value(&mut config.order, order, order.to_string())
                        .changed();
                }
            });

        changed |= ui
            .add(egui::Slider::new(&mut config.bar_width, 0.1..=1.0).text("Bar width"))
            .changed();

        ui.checkbox(&mut self.ui_state.show_table, "Show table");

        if changed {
            self.rebuild_chart();
        }
    }

    fn render_statistics(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("STATISTICS").small().strong());
        egui::Grid::new("statistics").num_columns(2).show(ui, |ui| {
            ui.label("Values");
            ui.label(format_number(self.stats.value_count));
            ui.end_row();
            ui.label("Distinct");
            ui.label(format_number(self.stats.distinct_count as u64));
            ui.end_row();
            ui.label("Max count");
            ui.label(format_number(self.stats.max_count));
            ui.end_row();
            if let Some(d) = self.stats.load_duration {
                ui.label("Load time");
                ui.label(format!("{:.2} ms", d.as_secs_f64() * 1000.0));
                ui.end_row();
            }
        });
    }
}
