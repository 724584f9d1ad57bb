//! Error types for the Quern library.
//!
//! All errors are represented by the [`QuernError`] enum. Corpus errors are
//! recoverable by design: a caller that fails to open a corpus may report
//! the error and keep going with an empty index.
//!
//! # Examples
//!
//! ```
//! use quern::error::{QuernError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(QuernError::corpus("corpus file missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Quern operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum QuernError {
    /// I/O errors (reading corpus lines, terminal interaction)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (source cannot be opened or read)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (parsing, evaluation)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with QuernError.
pub type Result<T> = std::result::Result<T, QuernError>;

impl QuernError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        QuernError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        QuernError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        QuernError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QuernError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = QuernError::corpus("Test corpus error");
        assert_eq!(error.to_string(), "Corpus error: Test corpus error");

        let error = QuernError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = QuernError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let quern_error = QuernError::from(io_error);

        match quern_error {
            QuernError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
