//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the pure domain code in the shared crate.

pub mod meal;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod weight;
pub mod workout;

pub use meal::MealSelector;
pub use plan::PlanService;
pub use profile::ProfileService;
pub use progress::ProgressService;
pub use weight::WeightService;
pub use workout::WorkoutSelector;
