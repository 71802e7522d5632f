//! Start-time bucket filter.

use crate::criteria::TimeOfDay;
use crate::error::{Result, SearchError};
use crate::traits::Filter;
use catalog::Course;
use std::collections::BTreeSet;
use tracing::debug;

/// Buckets a course by the hour of its start time and keeps it when the
/// bucket is one of the selected ones.
///
/// Morning is [8, 12), afternoon [12, 17), evening [17, 22). A start time
/// outside every bucket, or one that isn't `HH:MM`, does not match.
pub struct TimeOfDayFilter {
    buckets: BTreeSet<TimeOfDay>,
}

impl TimeOfDayFilter {
    pub fn new(buckets: impl IntoIterator<Item = TimeOfDay>) -> Self {
        Self {
            buckets: buckets.into_iter().collect(),
        }
    }
}

impl Filter for TimeOfDayFilter {
    fn name(&self) -> &str {
        "TimeOfDayFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        let schedule = course
            .schedule
            .as_ref()
            .ok_or_else(|| SearchError::MissingField {
                course_id: course.id.clone(),
                field: "schedule",
            })?;

        let Some(hour) = schedule.start_hour() else {
            debug!("Course {} has unreadable start time {:?}", course.id, schedule.start_time);
            return Ok(false);
        };
        Ok(self.buckets.iter().any(|bucket| bucket.contains(hour)))
    }
}
