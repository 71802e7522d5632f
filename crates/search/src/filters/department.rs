//! Department filter.

use crate::error::Result;
use crate::traits::Filter;
use catalog::Course;

/// Matches the department code exactly, or the start of the course code.
///
/// Both comparisons ignore case, so "csci" and "CSCI-B" both select
/// `CSCI-B551`.
pub struct DepartmentFilter {
    department: String,
}

impl DepartmentFilter {
    pub fn new(department: &str) -> Self {
        Self {
            department: department.trim().to_lowercase(),
        }
    }
}

impl Filter for DepartmentFilter {
    fn name(&self) -> &str {
        "DepartmentFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        Ok(course.department_code.to_lowercase() == self.department
            || course.code.to_lowercase().starts_with(&self.department))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::course;

    #[test]
    fn test_department_filter() {
        let c = course("1", "CSCI-B551");
        assert!(DepartmentFilter::new("CSCI").matches(&c).unwrap());
        assert!(DepartmentFilter::new("csci-b").matches(&c).unwrap());
        assert!(!DepartmentFilter::new("STAT").matches(&c).unwrap());
        assert!(!DepartmentFilter::new("B551").matches(&c).unwrap());
    }
}
