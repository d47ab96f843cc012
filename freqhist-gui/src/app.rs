//! Main application state and logic.
//!
//! Contains the `FreqhistApp` struct which manages the GUI state,
//! the counted data and message handling.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use eframe::egui;
use freqhist_core::{BarChart, ChartConfig, FrequencyMap, Value, ValueKind};
use freqhist_io::InputFormat;

use crate::loader::load_file_worker;
use crate::message::AppMessage;
use crate::state::{ProcessingState, Statistics, UiState};

/// Main application state.
pub struct FreqhistApp {
    /// Currently selected file path.
    pub(crate) selected_file: Option<PathBuf>,

    /// Input layout; `None` picks it from the file extension.
    pub(crate) input_format: Option<InputFormat>,
    /// Value kind used to parse the input.
    pub(crate) value_kind: ValueKind,
    /// Chart labels and bar order.
    pub(crate) chart_config: ChartConfig,

    /// Counted values of the loaded file.
    pub(crate) frequencies: Option<FrequencyMap<Value>>,
    /// Chart built from `frequencies` and `chart_config`.
    pub(crate) chart: Option<BarChart>,
    /// Summary of the loaded data.
    pub(crate) stats: Statistics,

    /// UI display state.
    pub(crate) ui_state: UiState,

    /// Message receiver for async operations.
    pub(crate) rx: Receiver<AppMessage>,
    /// Message sender for async operations.
    pub(crate) tx: Sender<AppMessage>,

    /// Loading state.
    pub(crate) processing: ProcessingState,
    /// Parse options changed during a load; reload once it finishes.
    pub(crate) pending_reload: bool,
}

impl Default for FreqhistApp {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            selected_file: None,

            input_format: None,
            value_kind: ValueKind::Auto,
            chart_config: ChartConfig::default(),

            frequencies: None,
            chart: None,
            stats: Statistics::default(),

            ui_state: UiState::default(),
            rx,
            tx,

            processing: ProcessingState::default(),
            pending_reload: false,
        }
    }
}

impl FreqhistApp {
    /// Load a file asynchronously.
    pub fn load_file(&mut self, path: PathBuf) {
        self.reset_load_state(path.as_path());

        let tx = self.tx.clone();
        let format = self.input_format;
        let kind = self.value_kind;
        thread::spawn(move || load_file_worker(path.as_path(), &tx, format, kind));
    }

    /// Reload the current file, e.g. after the parse options changed.
    pub fn reload(&mut self) {
        if let Some(path) = self.selected_file.clone() {
            self.load_file(path);
        }
    }

    /// Reload now, or after the running load when one is in flight.
    pub fn request_reload(&mut self) {
        if self.processing.is_loading {
            self.pending_reload = true;
        } else {
            self.reload();
        }
    }

    /// Reset application state for a new file load.
    fn reset_load_state(&mut self, path: &Path) {
        self.selected_file = Some(path.to_path_buf());
        self.processing.is_loading = true;
        self.processing.status_text.clear();
        self.processing.status_text.push_str("Loading file...");
        self.frequencies = None;
        self.chart = None;
        self.stats.clear();
    }

    /// Rebuild the chart from the counted data and the current config.
    pub fn rebuild_chart(&mut self) {
        let Some(map) = self.frequencies.as_ref() else {
            self.chart = None;
            return;
        };
        match BarChart::from_frequencies(map, &self.chart_config) {
            Ok(chart) => {
                if self.processing.status_text.starts_with("Error") {
                    self.processing.status_text = format!("Showing {} bars", chart.len());
                }
                self.chart = Some(chart);
            }
            Err(e) => {
                self.chart = None;
                self.processing.status_text = format!("Error: {e}");
            }
        }
    }

    /// Handle pending messages from async workers.
    pub fn handle_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMessage::LoadComplete(map, dur) => {
                    self.processing.is_loading = false;
                    self.processing.status_text = format!(
                        "Counted {} values in {:.2}ms",
                        map.total(),
                        dur.as_secs_f64() * 1000.0
                    );
                    self.stats = Statistics::from_map(&map, dur);
                    self.frequencies = Some(*map);
                    self.rebuild_chart();
                }
                AppMessage::LoadError(e) => {
                    self.processing.is_loading = false;
                    self.processing.status_text = format!("Error: {e}");
                }
            }
        }

        if self.pending_reload && !self.processing.is_loading {
            self.pending_reload = false;
            self.reload();
        }
    }
}

impl eframe::App for FreqhistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_messages();
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_table_window(ctx);

        if self.processing.is_loading {
            ctx.request_repaint();
        }
    }
}
