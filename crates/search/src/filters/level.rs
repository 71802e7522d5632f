//! Course level filter.

use crate::criteria::Level;
use crate::error::Result;
use crate::traits::Filter;
use catalog::Course;
use tracing::debug;

/// Keeps courses whose numeric course number falls in the selected level.
///
/// ## Algorithm
/// 1. Read the digits of the course number ("B551" -> 551)
/// 2. Check it against the level bounds
///
/// A number with no digits can't be placed in any level and simply doesn't
/// match.
pub struct LevelFilter {
    level: Level,
}

impl LevelFilter {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Filter for LevelFilter {
    fn name(&self) -> &str {
        "LevelFilter"
    }

    fn matches(&self, course: &Course) -> Result<bool> {
        match course.numeric_level() {
            Some(number) => Ok(self.level.contains(number)),
            None => {
                debug!("Course {} has no numeric course number ({:?})", course.id, course.number);
                Ok(false)
            }
        }
    }
}
