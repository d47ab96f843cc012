//! Frequency table writers.

use crate::Result;
use freqhist_core::Value;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `value,count` rows with a header.
    Csv,
    /// A JSON array of `{"value": …, "count": …}` objects.
    Json,
}

impl OutputFormat {
    /// Picks a format from the file extension, or `None` if it is not recognised.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct FrequencyRecord<'a> {
    value: &'a Value,
    count: u64,
}

/// Writer for frequency tables.
pub struct FrequencyWriter<W: Write> {
    writer: BufWriter<W>,
}

impl FrequencyWriter<File> {
    /// Creates a new file writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> FrequencyWriter<W> {
    /// Wraps any writer.
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    /// Writes entries in the given format.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<'a, I>(&mut self, entries: I, format: OutputFormat) -> Result<()>
    where
        I: IntoIterator<Item = (&'a Value, u64)>,
    {
        match format {
            OutputFormat::Csv => self.write_csv(entries),
            OutputFormat::Json => self.write_json(entries),
        }
    }

    /// Writes entries as CSV.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_csv<'a, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a Value, u64)>,
    {
        writeln!(self.writer, "value,count")?;

        for (value, count) in entries {
            writeln!(self.writer, "{},{}", csv_field(&value.to_string()), count)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Writes entries as a JSON array.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn write_json<'a, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a Value, u64)>,
    {
        let records: Vec<FrequencyRecord<'_>> = entries
            .into_iter()
            .map(|(value, count)| FrequencyRecord { value, count })
            .collect();
        serde_json::to_writer_pretty(&mut self.writer, &records)?;
        writeln!(self.writer)?;

        self.writer.flush()?;
        Ok(())
    }

    /// Flushes the writer.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Quotes a field if it contains a separator, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
