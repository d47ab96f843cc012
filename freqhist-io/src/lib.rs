//! freqhist-io: Reading values and writing frequency tables.
//!
//! Input files are read through memory maps via memmap2; any other
//! source can be read through [`read_values`].
//!

mod config;
mod error;
mod reader;
mod writer;

pub use config::load_chart_config;
pub use error::{Error, Result};
pub use reader::{parse_values, read_values, InputFormat, MappedFileReader};
pub use writer::{FrequencyWriter, OutputFormat};
