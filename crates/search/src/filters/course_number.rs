//! Course number filter.

use crate::error::Result;
use crate::traits::Filter;
use catalog::Course;

/// Case-insensitive substring match on the course number ("B551").
pub struct CourseNumberFilter {
    needle: String,
}

impl CourseNumberFilter {
    pub fn new(number: &str) -> Self {
        Self {
            needle: number.trim().to_lowercase(),
        }
    }
}

impl Filter for CourseNumberFilter {
    fn name(&self) -> &str {
        "CourseNumberFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        Ok(course.number.to_lowercase().contains(&self.needle))
    }
}
