//! freqhist GUI application entry point.
//!
//! Usage: `freqhist-gui [INPUT]`. The input file can also be opened from the window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod loader;
mod message;
mod state;
mod ui;
mod util;

use std::path::PathBuf;

use app::FreqhistApp;
use eframe::egui;
use freqhist_core::config::DEFAULT_TITLE;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(DEFAULT_TITLE)
            .with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        DEFAULT_TITLE,
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            let mut app = FreqhistApp::default();
            if let Some(path) = initial_file {
                app.load_file(path);
            }
            Ok(Box::new(app))
        }),
    )
}
