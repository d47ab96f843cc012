//! Terminal rendering of bar charts.

use std::fmt::Write;

use freqhist_core::BarChart;

const BAR_GLYPH: char = '█';

/// Renders a chart as horizontal text bars.
///
/// Each row shows the value label, a bar scaled so that the tallest bar
/// is `width` glyphs long, and the count. Non-zero counts always get at
/// least one glyph.
pub fn render_text(chart: &BarChart, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(out);

    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .chain(std::iter::once(chart.x_label.chars().count()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "{:>label_width$} | {}", chart.x_label, chart.y_label);
    let _ = writeln!(out, "{:->label_width$}-+-{:-<width$}", "", "");

    if chart.is_empty() {
        let _ = writeln!(out, "{:>label_width$} | (no data)", "");
        return out;
    }

    let max = chart.max_height();
    for bar in &chart.bars {
        let len = scaled_len(bar.height, max, width);
        let glyphs: String = std::iter::repeat(BAR_GLYPH).take(len).collect();
        let _ = writeln!(
            out,
            "{:>label_width$} | {glyphs} {}",
            bar.label, bar.height
        );
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scaled_len(height: u64, max: u64, width: usize) -> usize {
    if height == 0 || max == 0 {
        return 0;
    }
    let len = (height as f64 / max as f64 * width as f64).round() as usize;
    len.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqhist_core::{ChartConfig, FrequencyMap, Value};

    fn chart(values: &[i64]) -> BarChart {
        let map: FrequencyMap<Value> = values.iter().copied().map(Value::Integer).collect();
        BarChart::from_frequencies(&map, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn test_render_bars() {
        let text = render_text(&chart(&[1, 1, 2, 3, 3, 3]), 30);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Histogram of Frequencies");
        assert_eq!(lines[2], "Values | Frequency");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[4].matches(BAR_GLYPH).count(), 20);
        assert_eq!(lines[5].matches(BAR_GLYPH).count(), 10);
        assert_eq!(lines[6].matches(BAR_GLYPH).count(), 30);
        assert!(lines[6].ends_with(" 3"));
    }

    #[test]
    fn test_render_empty() {
        let text = render_text(&chart(&[]), 30);
        assert!(text.contains("(no data)"));
        assert!(!text.contains(BAR_GLYPH));
    }

    #[test]
    fn test_render_single_bar() {
        let text = render_text(&chart(&[5]), 10);
        let bars: Vec<&str> = text.lines().filter(|l| l.contains(BAR_GLYPH)).collect();
        assert_eq!(bars.len(), 1);
        assert!(bars[0].trim_start().starts_with("5 |"));
        assert!(bars[0].ends_with(" 1"));
    }

    #[test]
    fn test_small_counts_stay_visible() {
        assert_eq!(scaled_len(1, 1000, 40), 1);
        assert_eq!(scaled_len(0, 1000, 40), 0);
        assert_eq!(scaled_len(1000, 1000, 40), 40);
    }
}
