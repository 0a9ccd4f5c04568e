//! Smart Fitness Planner Shared Library
//!
//! This crate contains the domain models, calorie engine, catalogs and
//! progress aggregation used by both the backend and the WASM module.

pub mod catalog;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod progress;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use catalog::{Catalog, GoalCatalog, MealCatalog};
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use progress::{ProgressReport, WeightChange, WeeklySummary};
pub use types::*;
