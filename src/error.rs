//! Error types for the thesaurus library.
//!
//! All fallible operations return [`ThesaurusError`] through the crate-wide
//! [`Result`] alias. Loading a thesaurus fails in two distinct ways that
//! callers may want to tell apart: the backing source is missing
//! ([`ThesaurusError::NotFound`]) or its contents are structurally invalid
//! ([`ThesaurusError::Format`]).
//!
//! # Examples
//!
//! ```
//! use thesaurus::error::{Result, ThesaurusError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ThesaurusError::format("no encoding declared"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for thesaurus operations.
#[derive(Error, Debug)]
pub enum ThesaurusError {
    /// I/O errors while reading a thesaurus source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing thesaurus source does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The thesaurus source is structurally invalid
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid thesaurus or registry configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ThesaurusError.
pub type Result<T> = std::result::Result<T, ThesaurusError>;

impl ThesaurusError {
    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::NotFound(msg.into())
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::Format(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ThesaurusError::InvalidConfig(msg.into())
    }

    /// Whether this error reports a missing thesaurus source.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ThesaurusError::NotFound(_))
    }

    /// Whether this error reports an invalid thesaurus source.
    pub fn is_format(&self) -> bool {
        matches!(self, ThesaurusError::Format(_))
    }
}
