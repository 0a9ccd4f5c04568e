//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod plan;
pub mod profile;
pub mod weight;

pub use plan::{PlanRecord, PlanRepository, UpsertedPlan};
pub use profile::{CreateProfile, ProfileRecord, ProfileRepository, UpdateProfile};
pub use weight::{UpsertWeightEntry, WeightEntryRecord, WeightRepository};
