//! Error types for the search crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A record lacks a field the active filter needs to read
    #[error("Course {course_id} has no {field}")]
    MissingField {
        course_id: String,
        field: &'static str,
    },

    /// A criterion could not be parsed or is out of range
    #[error("Invalid value for {field}: {value}")]
    InvalidCriteria { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
