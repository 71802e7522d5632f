//! Professor name filter.

use crate::error::{Result, SearchError};
use crate::traits::Filter;
use catalog::Course;

/// Case-insensitive substring match on the professor's name.
pub struct ProfessorFilter {
    name: String,
}

impl ProfessorFilter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
        }
    }
}

impl Filter for ProfessorFilter {
    fn name(&self) -> &str {
        "ProfessorFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        let professor = course
            .professor_name()
            .ok_or_else(|| SearchError::MissingField {
                course_id: course.id.clone(),
                field: "professor",
            })?;
        Ok(professor.to_lowercase().contains(&self.name))
    }
}
