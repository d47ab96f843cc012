//! Value readers.
//!

use crate::{Error, Result};
use freqhist_core::{Value, ValueKind};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Layout of the values in an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Whitespace-separated tokens.
    #[default]
    Tokens,
    /// One value per line; blank lines are skipped, surrounding whitespace trimmed.
    Lines,
    /// A JSON array of numbers and/or strings.
    Json,
}

impl InputFormat {
    /// Picks a format from the file extension: `.json` is JSON, everything else tokens.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Tokens,
        }
    }
}

/// A memory-mapped input file.
///
/// Empty files are not mapped; they read as an empty byte slice.
pub struct MappedFileReader {
    mmap: Option<Mmap>,
    path: PathBuf,
}

impl MappedFileReader {
    /// Opens a file for memory-mapped reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or memory-mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            // SAFETY: The file is opened read-only and we assume it is not modified concurrently.
            // This is the standard safety contract for memory mapping.
            #[allow(unsafe_code)]
            let mmap = unsafe { Mmap::map(&file)? };
            Some(mmap)
        };
        Ok(Self {
            mmap,
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Returns the file contents as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the path the file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the contents as UTF-8 text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFormat`] if the file is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(self.as_bytes()).map_err(|e| {
            Error::InvalidFormat(format!("{} is not UTF-8: {e}", self.path.display()))
        })
    }

    /// Parses all values in the file.
    ///
    /// # Errors
    /// Returns an error if the file is not UTF-8 or a value does not parse.
    pub fn values(&self, format: InputFormat, kind: ValueKind) -> Result<Vec<Value>> {
        log::debug!(
            "parsing {} ({} bytes) as {format:?}",
            self.path.display(),
            self.len()
        );
        parse_values(self.as_str()?, format, kind)
    }
}

/// Reads an entire source and parses its values.
///
/// # Errors
/// Returns an error if reading fails, the data is not UTF-8, or a value does not parse.
pub fn read_values<R: Read>(
    mut reader: R,
    format: InputFormat,
    kind: ValueKind,
) -> Result<Vec<Value>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_values(&text, format, kind)
}

/// Parses values from text.
///
/// With [`ValueKind::Auto`] all values share the narrowest kind every token
/// parses as. JSON strings always make an auto-kind input text.
///
/// # Errors
/// Returns [`Error::InvalidFormat`] for malformed JSON or non-scalar JSON
/// elements, and a core error for tokens that do not parse as `kind`.
pub fn parse_values(text: &str, format: InputFormat, kind: ValueKind) -> Result<Vec<Value>> {
    let values = match format {
        InputFormat::Tokens => kind.parse_all(text.split_whitespace())?,
        InputFormat::Lines => {
            kind.parse_all(text.lines().map(str::trim).filter(|l| !l.is_empty()))?
        }
        InputFormat::Json => parse_json(text, kind)?,
    };
    log::debug!("parsed {} values", values.len());
    Ok(values)
}

fn parse_json(text: &str, kind: ValueKind) -> Result<Vec<Value>> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(text)?;

    let mut any_string = false;
    let mut tokens = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            serde_json::Value::Number(n) => tokens.push(n.to_string()),
            serde_json::Value::String(s) => {
                any_string = true;
                tokens.push(s);
            }
            other => {
                return Err(Error::InvalidFormat(format!(
                    "JSON input must be an array of numbers or strings, found {other}"
                )))
            }
        }
    }

    let kind = match kind {
        ValueKind::Auto if any_string => ValueKind::Text,
        other => other,
    };
    Ok(kind.parse_all(tokens.iter().map(String::as_str))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_tokens_and_lines() {
        let values = parse_values("1 1\n2\t3 3 3\n", InputFormat::Tokens, ValueKind::Auto).unwrap();
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], Value::Integer(1));

        let values =
            parse_values("new york\n\n  paris \nnew york\n", InputFormat::Lines, ValueKind::Auto)
                .unwrap();
        assert_eq!(
            values,
            vec![
                Value::text("new york"),
                Value::text("paris"),
                Value::text("new york")
            ]
        );
    }

    #[test]
    fn test_json_kinds() {
        let values = parse_values("[1, 2, 2]", InputFormat::Json, ValueKind::Auto).unwrap();
        assert_eq!(values[2], Value::Integer(2));

        let values = parse_values("[1.5, 2]", InputFormat::Json, ValueKind::Auto).unwrap();
        assert_eq!(values[0], Value::float(1.5).unwrap());
        assert_eq!(values[1], Value::float(2.0).unwrap());

        let values = parse_values(r#"["1", "a"]"#, InputFormat::Json, ValueKind::Auto).unwrap();
        assert_eq!(values, vec![Value::text("1"), Value::text("a")]);

        let values = parse_values(r#"["7"]"#, InputFormat::Json, ValueKind::Integer).unwrap();
        assert_eq!(values, vec![Value::Integer(7)]);
    }

    #[test]
    fn test_json_rejects_nested() {
        let err = parse_values("[[1]]", InputFormat::Json, ValueKind::Auto).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));

        let err = parse_values("{\"a\": 1}", InputFormat::Json, ValueKind::Auto).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_forced_kind_error() {
        let err = parse_values("1 x", InputFormat::Tokens, ValueKind::Integer).unwrap_err();
        assert!(matches!(err, Error::CoreError(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path("data.JSON"), InputFormat::Json);
        assert_eq!(InputFormat::from_path("data.txt"), InputFormat::Tokens);
        assert_eq!(InputFormat::from_path("data"), InputFormat::Tokens);
    }

    #[test]
    fn test_mapped_reader() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a b a").unwrap();
        file.flush().unwrap();

        let reader = MappedFileReader::open(file.path()).unwrap();
        assert_eq!(reader.len(), 5);
        let values = reader.values(InputFormat::Tokens, ValueKind::Auto).unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_mapped_reader_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let reader = MappedFileReader::open(file.path()).unwrap();
        assert!(reader.is_empty());
        let values = reader.values(InputFormat::Tokens, ValueKind::Auto).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_read_values_from_reader() {
        let values = read_values("x y".as_bytes(), InputFormat::Tokens, ValueKind::Text).unwrap();
        assert_eq!(values, vec![Value::text("x"), Value::text("y")]);
    }
}
