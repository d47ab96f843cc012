//! File loading worker.
//!
//! Reads and counts an input file on a background thread and reports the
//! result to the UI thread.

use std::path::Path;
use std::sync::mpsc::Sender;
use std::time::Instant;

use anyhow::Context;
use freqhist_core::{FrequencyMap, Value, ValueKind};
use freqhist_io::{InputFormat, MappedFileReader};

use crate::message::AppMessage;

/// Entry point for file loading in a background thread.
pub fn load_file_worker(
    path: &Path,
    tx: &Sender<AppMessage>,
    format: Option<InputFormat>,
    kind: ValueKind,
) {
    let start = Instant::now();
    let msg = match count_file(path, format, kind) {
        Ok(map) => {
            log::info!(
                "loaded {}: {} values, {} distinct",
                path.display(),
                map.total(),
                map.len()
            );
            AppMessage::LoadComplete(Box::new(map), start.elapsed())
        }
        Err(e) => {
            log::error!("failed to load {}: {e:#}", path.display());
            AppMessage::LoadError(format!("{e:#}"))
        }
    };
    // The receiver only disappears when the window is closing.
    let _ = tx.send(msg);
}

/// Reads and counts a file. `None` picks the format from the extension.
pub fn count_file(
    path: &Path,
    format: Option<InputFormat>,
    kind: ValueKind,
) -> anyhow::Result<FrequencyMap<Value>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let reader = MappedFileReader::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let values = reader
        .values(format, kind)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(FrequencyMap::count_parallel(&values))
}
