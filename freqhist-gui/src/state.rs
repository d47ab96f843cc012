//! Application state.

use std::time::Duration;

use freqhist_core::{FrequencyMap, Value};

/// Tracks the state of background loading.
pub struct ProcessingState {
    /// Whether a file is currently being loaded.
    pub is_loading: bool,
    /// User-facing status message.
    pub status_text: String,
}

impl Default for ProcessingState {
    fn default() -> Self {
        Self {
            is_loading: false,
            status_text: "Ready".to_string(),
        }
    }
}

/// UI toggles.
#[derive(Default)]
pub struct UiState {
    /// Whether the frequency table window is visible.
    pub show_table: bool,
}

/// Summary of the loaded data.
#[derive(Default)]
pub struct Statistics {
    /// Number of values read.
    pub value_count: u64,
    /// Number of distinct values.
    pub distinct_count: usize,
    /// Largest count.
    pub max_count: u64,
    /// Time taken to read and count the file.
    pub load_duration: Option<Duration>,
}

impl Statistics {
    /// Summarizes a frequency map.
    pub fn from_map(map: &FrequencyMap<Value>, load_duration: Duration) -> Self {
        Self {
            value_count: map.total(),
            distinct_count: map.len(),
            max_count: map.max_count(),
            load_duration: Some(load_duration),
        }
    }

    /// Clear all statistics.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
