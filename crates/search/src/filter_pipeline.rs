//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::Criteria;
use crate::filters::*;
use crate::traits::Filter;
use catalog::Course;
use tracing::{debug, warn};

/// Chains multiple filters together into a processing pipeline.
///
/// Filters combine with logical AND. Each stage keeps the relative order of
/// its input, so the final result is in source order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TermFilter::new("Fall"))
///     .add_filter(CreditsFilter::new(CreditRange::new(3, 4)?));
///
/// let matching = pipeline.apply(index.courses());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build a pipeline holding one filter per active criterion.
    pub fn from_criteria(criteria: &Criteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(keyword) = &criteria.keyword {
            let filter = KeywordFilter::new(keyword);
            // whitespace-only queries carry no tokens
            if !filter.tokens().is_empty() {
                pipeline = pipeline.add_filter(filter);
            }
        }
        if let Some(term) = &criteria.term {
            pipeline = pipeline.add_filter(TermFilter::new(term));
        }
        if let Some(department) = &criteria.department {
            pipeline = pipeline.add_filter(DepartmentFilter::new(department));
        }
        if let Some(professor) = &criteria.professor {
            pipeline = pipeline.add_filter(ProfessorFilter::new(professor));
        }
        if let Some(number) = &criteria.course_number {
            pipeline = pipeline.add_filter(CourseNumberFilter::new(number));
        }
        if let Some(level) = criteria.level {
            pipeline = pipeline.add_filter(LevelFilter::new(level));
        }
        if let Some(mode) = criteria.mode {
            pipeline = pipeline.add_filter(ModeFilter::new(mode));
        }
        if let Some(range) = criteria.credits.filter(|r| !r.is_full()) {
            pipeline = pipeline.add_filter(CreditsFilter::new(range));
        }
        if !criteria.days.is_empty() {
            pipeline = pipeline.add_filter(DaysFilter::new(criteria.days.iter().copied()));
        }
        if !criteria.times.is_empty() {
            pipeline = pipeline.add_filter(TimeOfDayFilter::new(criteria.times.iter().copied()));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the courses.
    ///
    /// ## Algorithm
    /// 1. Start with every course, in order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain courses the filter accepts; a record the filter can't
    ///       evaluate is logged and dropped
    ///    c. Log output count
    /// 3. Return what is left
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        let mut current: Vec<&Course> = courses.iter().collect();
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|course| keep(&**filter, course));
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

}

fn keep(filter: &dyn Filter, course: &Course) -> bool {
    match filter.matches(course) {
        Ok(matched) => matched,
        Err(e) => {
            warn!("{} excluded a record: {}", filter.name(), e);
            false
        }
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
