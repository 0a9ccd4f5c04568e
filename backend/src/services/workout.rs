//! Workout selector
//!
//! Picks a day's exercises from the goal's catalog by uniform sampling
//! without replacement. Days are independent of each other.

use fitness_planner_shared::models::{Day, Exercise, Goal};
use rand::seq::SliceRandom;
use rand::Rng;

/// Sunday is always a light day
pub const SUNDAY_EXERCISE_COUNT: usize = 3;

pub struct WorkoutSelector;

impl WorkoutSelector {
    /// Requested number of exercises for a day
    pub fn exercise_count(goal: Goal, day: Day) -> usize {
        let (full, reduced) = match goal {
            Goal::WeightLoss => (5, 4),
            Goal::MuscleGain | Goal::Maintenance => (6, 5),
        };
        match day {
            Day::Wednesday | Day::Saturday => reduced,
            Day::Sunday => SUNDAY_EXERCISE_COUNT,
            _ => full,
        }
    }

    /// Shuffle a copy of the catalog and keep the first `count` entries
    pub fn select<R: Rng + ?Sized>(catalog: &[Exercise], count: usize, rng: &mut R) -> Vec<Exercise> {
        let mut exercises = catalog.to_vec();
        exercises.shuffle(rng);
        exercises.truncate(count.min(catalog.len()));
        exercises
    }

    pub fn select_for_day<R: Rng + ?Sized>(
        catalog: &[Exercise],
        goal: Goal,
        day: Day,
        rng: &mut R,
    ) -> Vec<Exercise> {
        Self::select(catalog, Self::exercise_count(goal, day), rng)
    }
}
