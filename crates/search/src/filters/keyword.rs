//! Free-text keyword filter.
//!
//! The query is lowercased and split on whitespace. A course matches when
//! ANY token appears in its name, description, code or professor name, so
//! "ai course" also finds courses that only mention "course".

use crate::error::{Result, SearchError};
use crate::traits::Filter;
use catalog::Course;

/// Keeps courses mentioning at least one query token.
///
/// ## Algorithm
/// 1. Lowercase the searchable text of the course
/// 2. Return true on the first token found as a substring
///
/// The professor name is part of the searched text, so a record without a
/// professor can't be evaluated and is reported as `MissingField`.
pub struct KeywordFilter {
    tokens: Vec<String>,
}

impl KeywordFilter {
    /// Create a new KeywordFilter from a raw query string.
    pub fn new(query: &str) -> Self {
        let tokens = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        let professor = course
            .professor_name()
            .ok_or_else(|| SearchError::MissingField {
                course_id: course.id.clone(),
                field: "professor",
            })?;

        let haystacks = [
            course.name.to_lowercase(),
            course.description.to_lowercase(),
            course.code.to_lowercase(),
            professor.to_lowercase(),
        ];

        Ok(self
            .tokens
            .iter()
            .any(|token| haystacks.iter().any(|text| text.contains(token.as_str()))))
    }
}
