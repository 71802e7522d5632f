//! Credit range filter.

use crate::criteria::CreditRange;
use crate::error::Result;
use crate::traits::Filter;
use catalog::Course;

/// Inclusive at both ends.
pub struct CreditsFilter {
    range: CreditRange,
}

impl CreditsFilter {
    pub fn new(range: CreditRange) -> Self {
        Self { range }
    }
}

impl Filter for CreditsFilter {
    fn name(&self) -> &str {
        "CreditsFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        Ok(self.range.contains(course.credits))
    }
}
