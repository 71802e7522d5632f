//! Course search for the catalog.
//!
//! This crate provides:
//! - Criteria describing what the student is looking for
//! - Filter trait and one implementation per criterion
//! - FilterPipeline for composing filters
//! - `filter()`, the pure (courses, criteria) -> courses entry point
//!
//! ## Architecture
//! Criteria are turned into a pipeline holding only the active filters.
//! The pipeline runs each filter over the surviving courses in turn, so
//! active constraints combine with AND and results keep catalog order.
//!
//! ## Example Usage
//! ```ignore
//! use search::{filter, Criteria, Level, TimeOfDay};
//! use catalog::Weekday;
//!
//! let criteria = Criteria::new()
//!     .with_keyword("machine learning")
//!     .with_level(Level::Graduate)
//!     .with_days([Weekday::Monday])
//!     .with_times([TimeOfDay::Afternoon]);
//!
//! let results = filter(index.courses(), &criteria);
//! ```

pub mod error;
pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use error::{Result, SearchError};
pub use criteria::{active_text, CreditRange, Criteria, Level, TimeOfDay, CREDIT_BOUNDS};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use engine::{filter, filter_refs};
