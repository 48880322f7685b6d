//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Column assignment errors
    #[error("Assignment error: {0}")]
    Assignment(#[from] AssignmentError),

    /// Masking process errors
    #[error("Masking error: {0}")]
    Masking(String),

    /// Strict-mode value failure: a rule could not transform a value
    /// and passthrough is disabled
    #[error("Masking failed for column '{column}' row {row}: {reason}")]
    StrictValueFailure {
        column: String,
        row: usize,
        reason: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while parsing a `column:function` assignment pair
///
/// These are configuration errors: the calling code reports them, skips the
/// offending pair, and continues with the remaining assignments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// Pair is missing the `:` separator
    #[error("Invalid assignment '{0}': expected 'column:function'")]
    InvalidFormat(String),

    /// Pair has an empty column name
    #[error("Invalid assignment '{0}': column name is empty")]
    EmptyColumn(String),

    /// The function tag is not a known field kind
    #[error("Unknown masking function '{tag}' in assignment '{pair}'")]
    UnknownFieldKind { pair: String, tag: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for VeilError {
    fn from(err: csv::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}
