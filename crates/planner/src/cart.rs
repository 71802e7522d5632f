//! The shopping cart: courses picked but not yet enrolled.

use crate::error::{PlannerError, Result};
use crate::store::CourseStore;
use catalog::Course;
use tracing::{debug, info, warn};

/// Result of adding a course to a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A course with the same id was already there; nothing changed
    AlreadyPresent,
}

/// Cart contents backed by a [`CourseStore`].
///
/// Every mutation is written through to the store before returning.
pub struct Cart {
    store: Box<dyn CourseStore>,
    items: Vec<Course>,
}

impl Cart {
    /// Open the cart, reading whatever the store already holds.
    ///
    /// A corrupt store is logged and treated as empty; other store errors
    /// are returned.
    pub fn open(store: impl CourseStore + 'static) -> Result<Self> {
        let items = load_or_empty(&store)?;
        debug!("Cart opened with {} courses from {}", items.len(), store.describe());
        Ok(Self {
            store: Box::new(store),
            items,
        })
    }

    pub fn add(&mut self, course: Course) -> Result<AddOutcome> {
        if self.contains(&course.id) {
            debug!("{} is already in the cart", course.code);
            return Ok(AddOutcome::AlreadyPresent);
        }
        info!("Added {} to cart", course.code);
        self.items.push(course);
        self.store.save(&self.items)?;
        Ok(AddOutcome::Added)
    }

    /// Remove a course by id, returning it if it was there.
    pub fn remove(&mut self, id: &str) -> Result<Option<Course>> {
        let Some(pos) = self.items.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let removed = self.items.remove(pos);
        self.store.save(&self.items)?;
        info!("Removed {} from cart", removed.code);
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.store.clear()
    }

    /// Empty the cart and hand back what it held.
    pub(crate) fn drain(&mut self) -> Result<Vec<Course>> {
        let items = std::mem::take(&mut self.items);
        self.store.clear()?;
        Ok(items)
    }

    pub fn items(&self) -> &[Course] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|c| c.id == id)
    }

    pub fn total_credits(&self) -> u32 {
        self.items.iter().map(|c| u32::from(c.credits)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read a store, treating a corrupt one as empty.
pub(crate) fn load_or_empty(store: &dyn CourseStore) -> Result<Vec<Course>> {
    match store.load() {
        Ok(courses) => Ok(courses),
        Err(PlannerError::Corrupt { path, source }) => {
            warn!("Ignoring unreadable course list at {}: {}", path, source);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
