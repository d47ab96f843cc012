//! Bar chart model.
//!
//! A [`BarChart`] is the renderer-independent description of a frequency
//! histogram: one [`Bar`] per distinct value, positioned on the horizontal
//! axis and as tall as the value's count. Front ends draw it with whatever
//! facility they have (egui plot, terminal text).

use crate::{BarOrder, ChartConfig, Error, FrequencyMap, Result, Value};

/// How bar positions relate to the values they represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Bars sit at their numeric value.
    Numeric,
    /// Bars sit at `0, 1, 2, …` in layout order and carry their value as a tick label.
    Categorical,
}

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The value this bar represents, formatted for display.
    pub label: String,
    /// Center of the bar on the horizontal axis.
    pub position: f64,
    /// Bar height, the value's count.
    pub height: u64,
}

/// A frequency bar chart ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Axis semantics.
    pub axis: AxisKind,
    /// Absolute bar width in axis units.
    pub bar_width: f64,
    /// Bars in layout order.
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Builds a chart with one bar per distinct value.
    ///
    /// Text values make the axis categorical. On a numeric axis the bar
    /// width is scaled down when distinct values are closer than one unit.
    /// An empty map yields a chart with no bars.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if `config` is invalid and
    /// [`Error::MixedKinds`] if the map holds values of more than one kind.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_frequencies(map: &FrequencyMap<Value>, config: &ChartConfig) -> Result<Self> {
        config.validate()?;

        let mut kinds = map.keys().map(Value::kind);
        if let Some(first) = kinds.next() {
            if let Some(other) = kinds.find(|k| *k != first) {
                return Err(Error::MixedKinds { first, other });
            }
        }

        let entries = match config.order {
            BarOrder::FirstSeen => map.iter().collect(),
            BarOrder::Value => map.sorted_by_key(),
            BarOrder::Count => map.sorted_by_count(),
        };

        let axis = if map.keys().all(Value::is_numeric) {
            AxisKind::Numeric
        } else {
            AxisKind::Categorical
        };

        let bars: Vec<Bar> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (value, count))| Bar {
                label: value.to_string(),
                position: match axis {
                    AxisKind::Numeric => value.as_f64().unwrap_or(i as f64),
                    AxisKind::Categorical => i as f64,
                },
                height: count,
            })
            .collect();

        let slot = match axis {
            AxisKind::Numeric => min_gap(&bars).map_or(1.0, |gap| gap.min(1.0)),
            AxisKind::Categorical => 1.0,
        };

        Ok(Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            axis,
            bar_width: config.bar_width * slot,
            bars,
        })
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the chart has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Height of the tallest bar, 0 when empty.
    #[must_use]
    pub fn max_height(&self) -> u64 {
        self.bars.iter().map(|b| b.height).max().unwrap_or(0)
    }

    /// Sum of all bar heights.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bars.iter().map(|b| b.height).sum()
    }

    /// Horizontal extent covered by the bars, including their width.
    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let half = self.bar_width / 2.0;
        let min = self.bars.iter().map(|b| b.position).reduce(f64::min)?;
        let max = self.bars.iter().map(|b| b.position).reduce(f64::max)?;
        Some((min - half, max + half))
    }

    /// Tick label at an axis position.
    ///
    /// Only categorical charts have tick labels; numeric axes label themselves.
    #[must_use]
    pub fn tick_label(&self, position: f64) -> Option<&str> {
        if self.axis != AxisKind::Categorical || position < 0.0 || position.fract() != 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = position as usize;
        self.bars.get(index).map(|b| b.label.as_str())
    }
}

/// Smallest distance between two distinct bar positions.
fn min_gap(bars: &[Bar]) -> Option<f64> {
    let mut positions: Vec<f64> = bars.iter().map(|b| b.position).collect();
    positions.sort_by(f64::total_cmp);
    positions
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|gap| *gap > 0.0)
        .reduce(f64::min)
}
