//! Error types for boardsql

use thiserror::Error;

/// Result type alias for fragment building.
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for SQL fragment construction.
#[derive(Debug, Error)]
pub enum SqlError {
    /// The caller-supplied payload or criteria cannot produce a fragment
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Placeholder/parameter bookkeeping mismatch inside a fragment
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SqlError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is an invalid-input error
    ///
    /// Callers typically translate this into a client error response
    /// (HTTP 400 or equivalent).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
