//! Custom error types for the ledger
//!
//! Load-time problems (absent file, malformed lines, unparsable amounts) are
//! absorbed by the store and never show up here. These variants cover the
//! failures a user can actually see.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Amount text that is not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A field that would split the record across lines
    #[error("Invalid {0}: line breaks are not allowed")]
    LineBreak(&'static str),

    /// Export requested with a blank file name
    #[error("Invalid filename")]
    EmptyFilename,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is an amount parse failure
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
