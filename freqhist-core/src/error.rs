//! Error types for freqhist-core.

use thiserror::Error;

/// Result type alias for freqhist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for freqhist operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A float that cannot be compared for equality (NaN) or placed on an axis (infinite).
    #[error("non-finite float cannot be counted: {0}")]
    NonFiniteFloat(f64),

    /// A token that does not parse as the requested value kind.
    #[error("invalid {kind} value: {token:?}")]
    InvalidValue {
        /// The value kind the token was parsed as.
        kind: &'static str,
        /// The offending token.
        token: String,
    },

    /// A chart was requested for values of more than one kind.
    #[error("cannot chart {first} and {other} values together")]
    MixedKinds {
        /// Kind of the first value.
        first: crate::ValueKind,
        /// The first differing kind.
        other: crate::ValueKind,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
