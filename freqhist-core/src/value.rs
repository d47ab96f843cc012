//! Countable value types.
//!
//! A [`Value`] is one observation in the input sequence. All values of one
//! input share a single [`ValueKind`]; mixed sequences are parsed as text.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A finite `f64` usable as a hash map key.
///
/// NaN and the infinities are rejected on construction. Negative zero is
/// stored as positive zero so that equal floats hash equally.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct FloatKey(f64);

impl FloatKey {
    /// Creates a key from a finite float.
    ///
    /// # Errors
    /// Returns [`Error::NonFiniteFloat`] for NaN or infinite input.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteFloat(value));
        }
        // -0.0 == 0.0 but their bit patterns differ
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Returns the wrapped float.
    #[inline]
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for FloatKey {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FloatKey> for f64 {
    fn from(key: FloatKey) -> Self {
        key.0
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for FloatKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single observed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Whole number.
    Integer(i64),
    /// Finite real number.
    Float(FloatKey),
    /// Arbitrary label.
    Text(String),
}

impl Value {
    /// Creates a float value.
    ///
    /// # Errors
    /// Returns [`Error::NonFiniteFloat`] for NaN or infinite input.
    pub fn float(value: f64) -> Result<Self> {
        FloatKey::new(value).map(Self::Float)
    }

    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the numeric axis position, or `None` for text.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(v.get()),
            Self::Text(_) => None,
        }
    }

    /// Returns true for integer and float values.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Parses a single token as the given kind.
    ///
    /// [`ValueKind::Auto`] tries integer, then float, then falls back to text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidValue`] when the token does not parse as a
    /// forced numeric kind, and [`Error::NonFiniteFloat`] for `nan`/`inf`
    /// parsed as floats.
    pub fn parse(token: &str, kind: ValueKind) -> Result<Self> {
        match kind {
            ValueKind::Integer => token
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| invalid("integer", token)),
            ValueKind::Float => {
                let v = token.parse::<f64>().map_err(|_| invalid("float", token))?;
                Self::float(v)
            }
            ValueKind::Text => Ok(Self::text(token)),
            ValueKind::Auto => Self::parse(token, ValueKind::infer([token])),
        }
    }
}

fn invalid(kind: &'static str, token: &str) -> Error {
    Error::InvalidValue {
        kind,
        token: token.to_string(),
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Numbers compare by magnitude; equal magnitudes put integers first.
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a
                    .total_cmp(&b)
                    .then_with(|| self.kind().rank().cmp(&other.kind().rank())),
                _ => self.kind().rank().cmp(&other.kind().rank()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<FloatKey> for Value {
    fn from(v: FloatKey) -> Self {
        Self::Float(v)
    }
}

/// Semantic type of the values in one input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueKind {
    /// Infer the kind from the tokens.
    #[default]
    Auto,
    /// Whole numbers.
    Integer,
    /// Real numbers.
    Float,
    /// Labels.
    Text,
}

impl ValueKind {
    /// Infers the narrowest kind every token parses as.
    ///
    /// Integers win over floats, floats over text. `nan` and `inf` count as
    /// floats only next to at least one finite number, so that they are
    /// reported; on their own they are words. An empty token list infers
    /// [`ValueKind::Text`].
    pub fn infer<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all_int = true;
        let mut any_finite = false;
        for token in tokens {
            if token.parse::<i64>().is_ok() {
                any_finite = true;
                continue;
            }
            all_int = false;
            match token.parse::<f64>() {
                Ok(v) => any_finite |= v.is_finite(),
                Err(_) => return Self::Text,
            }
        }
        match (any_finite, all_int) {
            (false, _) => Self::Text,
            (true, true) => Self::Integer,
            (true, false) => Self::Float,
        }
    }

    /// Parses all tokens as one kind, resolving [`ValueKind::Auto`] first.
    ///
    /// # Errors
    /// Returns the first parse error; no partial result is produced.
    pub fn parse_all<'a, I>(self, tokens: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let tokens = tokens.into_iter();
        let kind = match self {
            Self::Auto => Self::infer(tokens.clone()),
            other => other,
        };
        tokens.map(|t| Value::parse(t, kind)).collect()
    }

    /// Short lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Integer => 1,
            Self::Float => 2,
            Self::Text => 3,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_key_rejects_non_finite() {
        assert!(matches!(
            FloatKey::new(f64::NAN),
            Err(Error::NonFiniteFloat(_))
        ));
        assert!(FloatKey::new(f64::INFINITY).is_err());
        assert!(FloatKey::new(f64::NEG_INFINITY).is_err());
        assert!(FloatKey::new(1.5).is_ok());
    }

    #[test]
    fn test_float_key_negative_zero() {
        let pos = FloatKey::new(0.0).unwrap();
        let neg = FloatKey::new(-0.0).unwrap();
        assert_eq!(pos, neg);
        assert_eq!(neg.get().to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_infer_kind() {
        assert_eq!(ValueKind::infer(["1", "2", "-3"]), ValueKind::Integer);
        assert_eq!(ValueKind::infer(["1", "2.5"]), ValueKind::Float);
        assert_eq!(ValueKind::infer(["1", "a"]), ValueKind::Text);
        assert_eq!(ValueKind::infer(["nan"]), ValueKind::Text);
        assert_eq!(ValueKind::infer(["1", "nan"]), ValueKind::Float);
        assert_eq!(ValueKind::infer(["inf", "2.5"]), ValueKind::Float);
        assert_eq!(ValueKind::infer(std::iter::empty()), ValueKind::Text);
    }

    #[test]
    fn test_parse_forced_kind() {
        assert_eq!(Value::parse("42", ValueKind::Integer).unwrap(), Value::Integer(42));
        assert_eq!(Value::parse("42", ValueKind::Text).unwrap(), Value::text("42"));
        assert!(matches!(
            Value::parse("4.2", ValueKind::Integer),
            Err(Error::InvalidValue { kind: "integer", .. })
        ));
        assert!(matches!(
            Value::parse("NaN", ValueKind::Float),
            Err(Error::NonFiniteFloat(_))
        ));
    }

    #[test]
    fn test_parse_all_auto_is_single_kind() {
        let values = ValueKind::Auto.parse_all(["1", "2.5", "1"]).unwrap();
        assert!(values.iter().all(|v| v.kind() == ValueKind::Float));

        let err = ValueKind::Auto.parse_all(["1", "nan"]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteFloat(_)));
    }

    #[test]
    fn test_non_finite_words_are_text() {
        let values = ValueKind::Auto.parse_all(["Nan", "Inf", "Nan"]).unwrap();
        assert_eq!(
            values,
            vec![Value::text("Nan"), Value::text("Inf"), Value::text("Nan")]
        );
        assert_eq!(
            Value::parse("infinity", ValueKind::Auto).unwrap(),
            Value::text("infinity")
        );
    }

    #[test]
    fn test_value_ordering_and_display() {
        let mut values = vec![Value::Integer(3), Value::Integer(-1), Value::Integer(2)];
        values.sort();
        assert_eq!(values, vec![Value::Integer(-1), Value::Integer(2), Value::Integer(3)]);

        let mut mixed = vec![
            Value::float(1.0).unwrap(),
            Value::Integer(1),
            Value::float(0.5).unwrap(),
            Value::Integer(-2),
        ];
        mixed.sort();
        assert_eq!(
            mixed,
            vec![
                Value::Integer(-2),
                Value::float(0.5).unwrap(),
                Value::Integer(1),
                Value::float(1.0).unwrap()
            ]
        );
        assert!(Value::Integer(100) < Value::text("1"));

        assert_eq!(Value::float(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Value::text("a").to_string(), "a");
        assert_eq!(Value::Integer(7).as_f64(), Some(7.0));
        assert_eq!(Value::text("x").as_f64(), None);
    }
}
