//! Entry points for running a search.

use crate::criteria::Criteria;
use crate::filter_pipeline::FilterPipeline;
use catalog::Course;
use tracing::debug;

/// Return the courses matching every active criterion, in source order.
///
/// Unset criteria impose no constraint, so `filter(courses, &Criteria::new())`
/// returns `courses` unchanged. Records that an active filter cannot
/// evaluate are left out and logged.
pub fn filter(all_courses: &[Course], criteria: &Criteria) -> Vec<Course> {
    filter_refs(all_courses, criteria)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter`].
pub fn filter_refs<'a>(all_courses: &'a [Course], criteria: &Criteria) -> Vec<&'a Course> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    if pipeline.is_empty() {
        return all_courses.iter().collect();
    }
    let matched = pipeline.apply(all_courses);
    debug!(
        "Search matched {} of {} courses using {:?}",
        matched.len(),
        all_courses.len(),
        pipeline.filter_names()
    );
    matched
}
