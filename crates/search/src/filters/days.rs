//! Meeting-day filter.

use crate::error::{Result, SearchError};
use crate::traits::Filter;
use catalog::{Course, Weekday};
use std::collections::BTreeSet;

/// Keeps courses meeting on at least one of the selected days.
///
/// Set intersection, not containment: selecting {Monday, Friday} keeps a
/// Monday/Wednesday course.
pub struct DaysFilter {
    days: BTreeSet<Weekday>,
}

impl DaysFilter {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }
}

impl Filter for DaysFilter {
    fn name(&self) -> &str {
        "DaysFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        let schedule = course
            .schedule
            .as_ref()
            .ok_or_else(|| SearchError::MissingField {
                course_id: course.id.clone(),
                field: "schedule",
            })?;
        Ok(schedule.days.iter().any(|day| self.days.contains(day)))
    }
}
