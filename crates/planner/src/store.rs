//! Persisted course lists.
//!
//! A [`CourseStore`] holds one list of courses. The cart and the enrolled
//! list each get their own store, so they can live in separate files or in
//! memory during tests.

use crate::error::{PlannerError, Result};
use catalog::Course;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Load/save interface for a single course list.
pub trait CourseStore: Send + Sync {
    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;

    /// Current contents. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<Course>>;

    /// Replace the contents.
    fn save(&self, courses: &[Course]) -> Result<()>;

    /// Drop the contents entirely.
    fn clear(&self) -> Result<()>;
}

// =============================================================================
// JSON file store
// =============================================================================

/// Stores the list as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CourseStore for JsonFileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Course>> {
        if !self.path.exists() {
            debug!("{} does not exist yet, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| PlannerError::Corrupt {
            path: self.describe(),
            source,
        })
    }

    fn save(&self, courses: &[Course]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(courses)?;

        // the target is only ever replaced whole
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved {} courses to {}", courses.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Keeps the list in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: Arc<RwLock<Vec<Course>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(RwLock::new(courses)),
        }
    }
}

impl CourseStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<Vec<Course>> {
        let courses = self.courses.read().unwrap_or_else(PoisonError::into_inner);
        Ok(courses.clone())
    }

    fn save(&self, courses: &[Course]) -> Result<()> {
        let mut stored = self.courses.write().unwrap_or_else(PoisonError::into_inner);
        *stored = courses.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.courses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
