//! Error types for the planner crate.

use thiserror::Error;

/// Errors raised by course stores and the lists built on them.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// I/O error while reading or writing a store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A store file exists but does not hold a course list
    #[error("Corrupt course store at {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Courses could not be serialized for saving
    #[error("Failed to encode courses: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PlannerError>;
