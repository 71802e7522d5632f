//! Schedule validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. the selection carries at least `min_credits` credits
//! 2. no two selected courses meet at overlapping times on a shared day
//! 3. every prerequisite code of a selected course is among the enrolled
//!    courses

use catalog::Course;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::debug;

/// Credits a term needs by default.
pub const DEFAULT_MIN_CREDITS: u32 = 12;

/// The first check a selection failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("You need at least {required} credits (selected {total}).")]
    InsufficientCredits { total: u32, required: u32 },

    #[error("There is a time conflict between {first} and {second}.")]
    TimeConflict { first: String, second: String },

    #[error("You do not meet the prerequisites for {}: missing {}.", .courses.join(", "), .missing.join(", "))]
    UnmetPrerequisites {
        /// Codes of the selected courses with unmet prerequisites
        courses: Vec<String>,
        /// The prerequisite codes that are missing, sorted
        missing: Vec<String>,
    },
}

impl ValidationIssue {
    /// Short label of the check that failed.
    pub fn check(&self) -> &'static str {
        match self {
            ValidationIssue::InsufficientCredits { .. } => "Minimum credits",
            ValidationIssue::TimeConflict { .. } => "No time clash",
            ValidationIssue::UnmetPrerequisites { .. } => "Prerequisites met",
        }
    }
}

/// Validate `selected` (usually one term of the enrolled list) against the
/// rules above. Prerequisites are looked up in `enrolled`.
pub fn validate_schedule(
    selected: &[&Course],
    enrolled: &[Course],
    min_credits: u32,
) -> Result<(), ValidationIssue> {
    let total: u32 = selected.iter().map(|c| u32::from(c.credits)).sum();
    debug!("Validating {} courses, {} credits", selected.len(), total);
    if total < min_credits {
        return Err(ValidationIssue::InsufficientCredits {
            total,
            required: min_credits,
        });
    }

    if let Some((first, second)) = find_time_conflict(selected) {
        return Err(ValidationIssue::TimeConflict {
            first: first.code.clone(),
            second: second.code.clone(),
        });
    }

    let enrolled_codes: HashSet<&str> = enrolled.iter().map(|c| c.code.as_str()).collect();
    let mut courses = Vec::new();
    let mut missing = BTreeSet::new();
    for course in selected {
        let unmet: Vec<&String> = course
            .prerequisites
            .iter()
            .filter(|p| !enrolled_codes.contains(p.as_str()))
            .collect();
        if !unmet.is_empty() {
            courses.push(course.code.clone());
            missing.extend(unmet.into_iter().cloned());
        }
    }
    if !courses.is_empty() {
        return Err(ValidationIssue::UnmetPrerequisites {
            courses,
            missing: missing.into_iter().collect(),
        });
    }

    Ok(())
}

/// First pair of courses whose schedules overlap. Courses without a
/// schedule never conflict.
pub fn find_time_conflict<'a>(courses: &[&'a Course]) -> Option<(&'a Course, &'a Course)> {
    for (i, first) in courses.iter().enumerate() {
        let Some(a) = &first.schedule else { continue };
        for second in &courses[i + 1..] {
            if let Some(b) = &second.schedule {
                if a.overlaps(b) {
                    return Some((*first, *second));
                }
            }
        }
    }
    None
}
