//! Error types for sales-index.
//!
//! Absence is not an error here: a failed lookup is `None`. Errors are
//! reserved for extraction from an empty heap and for loader failures.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for sales-index operations.
pub type Result<T> = std::result::Result<T, SalesError>;

/// Main error type for sales-index operations.
#[derive(Error, Debug)]
pub enum SalesError {
    /// `extract_max` called on a heap with no elements
    #[error("store is empty")]
    EmptyStore,

    /// Input row rejected by the loader (1-based line number)
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Input had no header row although one was expected
    #[error("input is empty, expected a header row")]
    MissingHeader,

    /// File could not be opened or read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SalesError {
    /// Create a malformed-record error from any string-like reason.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SalesError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an I/O error tagged with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SalesError::Io {
            path: path.into(),
            source,
        }
    }
}
