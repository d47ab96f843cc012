//! Application message types for async communication.
//!
//! Messages are sent from the loader thread to the UI thread via a channel.

use std::time::Duration;

use freqhist_core::{FrequencyMap, Value};

/// Messages sent from background workers to the UI thread.
pub enum AppMessage {
    /// File loaded and counted.
    ///
    /// Contains the frequency map and the time taken to read and count.
    LoadComplete(Box<FrequencyMap<Value>>, Duration),

    /// File loading failed.
    LoadError(String),
}
