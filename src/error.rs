//! Error types for FlatKV
//!
//! Provides a unified error type for all operations, plus a coarse
//! [`ErrorKind`] so callers can tell "key absent" from "value malformed"
//! from "storage unavailable" without matching every variant.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FlatKvError
pub type Result<T> = std::result::Result<T, FlatKvError>;

/// Unified error type for FlatKV operations
#[derive(Debug, Error)]
pub enum FlatKvError {
    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("Invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Invalid delimiter {0:?}: must not be the line terminator")]
    InvalidDelimiter(char),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Table not found: {}", .0.display())]
    TableNotFound(PathBuf),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Invalid integer value for key {key:?}: {value:?}")]
    InvalidInteger { key: String, value: String },

    #[error("Value for key {key:?} is not valid UTF-8")]
    InvalidUtf8 { key: String },

    #[error("Line {line} exceeds the maximum length of {limit} bytes")]
    LineTooLong { line: u64, limit: usize },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`FlatKvError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The key was empty or contained a reserved character, or the
    /// configured delimiter cannot separate fields
    InvalidArgument,

    /// The table file or the key does not exist
    NotFound,

    /// A value is present but cannot be interpreted, or a line is too long
    InvalidFormat,

    /// Open/read/write/rename failure at the storage layer
    Io,
}

impl FlatKvError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlatKvError::InvalidKey { .. } | FlatKvError::InvalidDelimiter(_) => {
                ErrorKind::InvalidArgument
            }
            FlatKvError::TableNotFound(_) | FlatKvError::KeyNotFound(_) => ErrorKind::NotFound,
            FlatKvError::InvalidInteger { .. }
            | FlatKvError::InvalidUtf8 { .. }
            | FlatKvError::LineTooLong { .. } => ErrorKind::InvalidFormat,
            FlatKvError::Io(_) => ErrorKind::Io,
        }
    }

    /// Shorthand for `kind() == ErrorKind::NotFound`
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
