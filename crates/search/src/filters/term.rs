//! Term filter ("Fall", "Spring", "Summer").

use crate::error::Result;
use crate::traits::Filter;
use catalog::Course;

/// Case-insensitive exact match on the course term.
pub struct TermFilter {
    term: String,
}

impl TermFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }
}

impl Filter for TermFilter {
    fn name(&self) -> &str {
        "TermFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        Ok(course.term.to_lowercase() == self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::course;

    #[test]
    fn test_term_filter() {
        let fall = course("1", "CSCI-B551");
        assert!(TermFilter::new("FALL").matches(&fall).unwrap());
        assert!(!TermFilter::new("Spring").matches(&fall).unwrap());
        // exact, not substring
        assert!(!TermFilter::new("Fal").matches(&fall).unwrap());
    }
}
