//! freqhist-core: Core types for frequency histograms.
//!
//! This crate provides the countable [`Value`] type, the [`FrequencyMap`]
//! counter and the renderer-independent [`BarChart`] model.
//!

pub mod chart;
pub mod config;
pub mod error;
pub mod frequency;
pub mod value;

pub use chart::{AxisKind, Bar, BarChart};
pub use config::{BarOrder, ChartConfig};
pub use error::{Error, Result};
pub use frequency::FrequencyMap;
pub use value::{FloatKey, Value, ValueKind};
