//! Error types for rowql.
//!
//! Minimal error types without display-layer dependencies.

use thiserror::Error;

/// Rowql error type
#[derive(Error, Debug)]
pub enum RowqlError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Evaluation error: {0}")]
    ExecutionError(String),
}

/// Result type for rowql operations
pub type RowqlResult<T> = Result<T, RowqlError>;

impl serde::Serialize for RowqlError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
