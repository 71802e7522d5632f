//! Core traits for the search pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a course list.

use crate::error::Result;
use catalog::Course;

/// A single search predicate.
///
/// ## Design Note
/// - `Send + Sync` lets a built pipeline be shared across threads
/// - `matches` looks at one record at a time; an `Err` means the record
///   lacks a field this filter needs, and the pipeline drops that record
///   instead of failing the whole pass
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether `course` satisfies this filter.
    ///
    /// # Returns
    /// * `Ok(true)` / `Ok(false)` - The course matches / does not match
    /// * `Err(SearchError::MissingField)` - The record can't be evaluated
    fn matches(&self, course: &Course) -> Result<bool>;
}
