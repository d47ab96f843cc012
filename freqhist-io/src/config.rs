//! Chart configuration files.

use crate::Result;
use freqhist_core::ChartConfig;
use std::path::Path;

/// Loads a [`ChartConfig`] from a JSON file.
///
/// Missing fields take their default values.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or
/// describes an invalid configuration.
pub fn load_chart_config<P: AsRef<Path>>(path: P) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(&path)?;
    let config: ChartConfig = serde_json::from_str(&text)?;
    config.validate()?;
    log::debug!("loaded chart config from {}", path.as_ref().display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqhist_core::BarOrder;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Rolls", "order": "count"}}"#).unwrap();
        file.flush().unwrap();

        let config = load_chart_config(file.path()).unwrap();
        assert_eq!(config.title, "Rolls");
        assert_eq!(config.order, BarOrder::Count);
        assert_eq!(config.x_label, "Values");
        assert_eq!(config.y_label, "Frequency");
    }

    #[test]
    fn test_invalid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"bar_width": 2.0}}"#).unwrap();
        file.flush().unwrap();

        let err = load_chart_config(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::CoreError(_)));
    }
}
