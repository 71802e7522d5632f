//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or indexing course data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document as a whole is not valid JSON
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is JSON but not a course list
    #[error("Unexpected catalog layout: {0}")]
    Layout(String),

    /// A field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same identifier
    #[error("Duplicate course id: {0}")]
    DuplicateId(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
