//! Core error types for habitloop-core.
//!
//! The taxonomy mirrors how failures behave at the CLI boundary:
//! validation errors are recoverable and rendered as messages, store
//! errors are fatal to the attempted operation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Flat-file persistence errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Store-specific errors. Each variant carries the offending path.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Document file exists but cannot be read
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document file cannot be written
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document file is not valid JSON for the expected shape
    #[error("Failed to parse {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document cannot be serialized
    #[error("Failed to encode document: {0}")]
    EncodeFailed(#[from] serde_json::Error),

    /// CSV export file cannot be written
    #[error("Failed to write export {path}: {source}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Validation errors. Messages are shown to the user verbatim.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Habit name is empty after trimming
    #[error("Habit name cannot be empty")]
    EmptyName,

    /// Habit name already registered
    #[error("Habit '{0}' already exists")]
    DuplicateHabit(String),

    /// No habit under that name
    #[error("Habit '{0}' not found")]
    UnknownHabit(String),

    /// Date input does not parse as an ISO calendar date
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Timer input does not parse as a whole number
    #[error("Invalid {field}: '{value}' is not a whole number")]
    NotAnInteger { field: &'static str, value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
