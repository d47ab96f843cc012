//! Chart configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Histogram of Frequencies";
/// Default horizontal axis label.
pub const DEFAULT_X_LABEL: &str = "Values";
/// Default vertical axis label.
pub const DEFAULT_Y_LABEL: &str = "Frequency";
/// Default bar width, in axis units.
pub const DEFAULT_BAR_WIDTH: f64 = 0.8;

/// Order in which bars are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BarOrder {
    /// Order of first occurrence in the input.
    #[default]
    FirstSeen,
    /// Ascending by value.
    Value,
    /// Descending by count.
    Count,
}

impl std::fmt::Display for BarOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarOrder::FirstSeen => write!(f, "First seen"),
            BarOrder::Value => write!(f, "By value"),
            BarOrder::Count => write!(f, "By count"),
        }
    }
}

/// Configuration for building a bar chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Width of each bar, as a fraction of the unit spacing.
    pub bar_width: f64,
    /// Bar layout order.
    pub order: BarOrder,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
            order: BarOrder::FirstSeen,
        }
    }
}

impl ChartConfig {
    /// Creates a chart configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the horizontal axis label.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the vertical axis label.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the bar width.
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    /// Sets the bar order.
    pub fn with_order(mut self, order: BarOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks that the configuration can be rendered.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if the bar width is not in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.bar_width > 0.0 && self.bar_width <= 1.0) {
            return Err(Error::ConfigError(format!(
                "bar width must be in (0, 1], got {}",
                self.bar_width
            )));
        }
        Ok(())
    }
}
