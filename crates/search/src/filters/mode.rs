//! Delivery mode filter.

use crate::error::Result;
use crate::traits::Filter;
use catalog::{Course, DeliveryMode};

/// Exact match on delivery mode. Case-insensitivity is handled when the
/// mode string is parsed into a `DeliveryMode`.
pub struct ModeFilter {
    mode: DeliveryMode,
}

impl ModeFilter {
    pub fn new(mode: DeliveryMode) -> Self {
        Self { mode }
    }
}

impl Filter for ModeFilter {
    fn name(&self) -> &str {
        "ModeFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        Ok(course.mode == self.mode)
    }
}
