//! Service crate for Course Compass.
//!
//! This crate contains the configuration layer and the service that
//! coordinates catalog loading, search, the planner and the advisor.

pub mod config;
pub mod orchestrator;

pub use config::{ApiConfig, CatalogConfig, CatalogSource, CompassConfig, PlannerConfig, StorageConfig};
pub use orchestrator::CompassService;
