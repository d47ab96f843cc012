//! Application colors and style.

use eframe::egui::{self, Color32, Rounding, Stroke};

/// Bar fill color.
pub const BAR_FILL: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);
/// Accent for highlighted text and active widgets.
pub const ACCENT: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
/// Error text.
pub const ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

/// Configure egui style on top of the system light/dark visuals.
pub fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.selection.bg_fill = BAR_FILL;
    style.visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.bg_fill = BAR_FILL;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BAR_FILL);
    style.visuals.window_rounding = Rounding::same(6.0);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);
}
