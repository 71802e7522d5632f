//! # Planner Crate
//!
//! The student's side of the catalog: a cart of picked courses, the
//! enrolled list they turn into, and the checks a term's schedule has to
//! pass.
//!
//! ## Main Components
//!
//! - **store**: `CourseStore` trait with JSON-file and in-memory stores
//! - **cart**: `Cart` (add / remove / clear, duplicate-safe)
//! - **enrollment**: `Enrollment` (enroll from cart, unenroll, group by term)
//! - **validation**: credit, time-clash and prerequisite checks
//!
//! ## Example Usage
//!
//! ```ignore
//! use planner::{Cart, Enrollment, JsonFileStore};
//!
//! let mut cart = Cart::open(JsonFileStore::new(".course-compass/cart.json"))?;
//! let mut enrolled = Enrollment::open(JsonFileStore::new(".course-compass/enrolled.json"))?;
//! cart.add(course)?;
//! let outcome = enrolled.enroll_from(&mut cart)?;
//! println!("{} courses enrolled", outcome.added);
//! ```

pub mod error;
pub mod store;
pub mod cart;
pub mod enrollment;
pub mod validation;

pub use cart::{AddOutcome, Cart};
pub use enrollment::{EnrollOutcome, Enrollment};
pub use error::{PlannerError, Result};
pub use store::{CourseStore, JsonFileStore, MemoryStore};
pub use validation::{find_time_conflict, validate_schedule, ValidationIssue, DEFAULT_MIN_CREDITS};
