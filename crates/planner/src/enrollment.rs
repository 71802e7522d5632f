//! The enrolled list.
//!
//! "Enrolling" only moves courses from the cart into a second persisted
//! list; there is no registrar behind it.

use crate::cart::{load_or_empty, Cart};
use crate::error::Result;
use crate::store::CourseStore;
use catalog::Course;
use std::collections::HashSet;
use tracing::{debug, info};

/// What [`Enrollment::enroll_from`] did with the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollOutcome {
    /// Courses newly added to the enrolled list
    pub added: usize,
    /// Cart courses that were already enrolled and were skipped
    pub already_enrolled: usize,
}

pub struct Enrollment {
    store: Box<dyn CourseStore>,
    courses: Vec<Course>,
}

impl Enrollment {
    /// Open the enrolled list. A corrupt store is logged and treated as empty.
    pub fn open(store: impl CourseStore + 'static) -> Result<Self> {
        let courses = load_or_empty(&store)?;
        debug!(
            "Enrollment opened with {} courses from {}",
            courses.len(),
            store.describe()
        );
        Ok(Self {
            store: Box::new(store),
            courses,
        })
    }

    /// Move every cart course into the enrolled list and empty the cart.
    ///
    /// Courses already enrolled (by id) are not added twice.
    pub fn enroll_from(&mut self, cart: &mut Cart) -> Result<EnrollOutcome> {
        let mut outcome = EnrollOutcome::default();
        let mut enrolled: HashSet<String> = self.courses.iter().map(|c| c.id.clone()).collect();

        for course in cart.items() {
            if enrolled.insert(course.id.clone()) {
                self.courses.push(course.clone());
                outcome.added += 1;
            } else {
                outcome.already_enrolled += 1;
            }
        }

        if outcome.added > 0 {
            self.store.save(&self.courses)?;
        }
        cart.drain()?;

        info!(
            "Enrolled {} courses ({} already enrolled)",
            outcome.added, outcome.already_enrolled
        );
        Ok(outcome)
    }

    /// Drop a course by id, returning it if it was enrolled.
    pub fn unenroll(&mut self, id: &str) -> Result<Option<Course>> {
        let Some(pos) = self.courses.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let removed = self.courses.remove(pos);
        self.store.save(&self.courses)?;
        info!("Removed {} from enrolled courses", removed.code);
        Ok(Some(removed))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_enrolled(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    /// Courses whose "Term Year" label matches `term`, case-insensitively.
    /// `"all"` or a blank term returns everything.
    pub fn by_term(&self, term: &str) -> Vec<&Course> {
        let term = term.trim();
        if term.is_empty() || term.eq_ignore_ascii_case("all") {
            return self.courses.iter().collect();
        }
        self.courses
            .iter()
            .filter(|c| c.term_label().eq_ignore_ascii_case(term))
            .collect()
    }

    /// Distinct "Term Year" labels in first-seen order.
    pub fn terms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.courses
            .iter()
            .map(Course::term_label)
            .filter(|label| seen.insert(label.clone()))
            .collect()
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| u32::from(c.credits)).sum()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
