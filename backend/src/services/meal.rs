//! Meal selector
//!
//! One uniformly random pick per main slot. The snack share of the calorie
//! target only decides how many snacks are drawn; catalog calories are fixed.

use fitness_planner_shared::catalog::MealCatalog;
use fitness_planner_shared::health_metrics::MealCalorieSplit;
use fitness_planner_shared::models::{DailyMealSet, MealOption, MealType};
use rand::seq::SliceRandom;
use rand::Rng;

/// Snack budgets above this get a second snack
pub const SECOND_SNACK_THRESHOLD: i32 = 150;

pub struct MealSelector;

impl MealSelector {
    pub fn snack_count(target_calories: i32) -> usize {
        if MealCalorieSplit::from_target(target_calories).snacks > SECOND_SNACK_THRESHOLD {
            2
        } else {
            1
        }
    }

    /// Build a day's meal set. `None` when a slot has no catalog entries.
    pub fn select<R: Rng + ?Sized>(
        catalog: &MealCatalog,
        target_calories: i32,
        rng: &mut R,
    ) -> Option<DailyMealSet> {
        let breakfast = pick(catalog, MealType::Breakfast, rng)?;
        let lunch = pick(catalog, MealType::Lunch, rng)?;
        let dinner = pick(catalog, MealType::Dinner, rng)?;
        // drawn with replacement, so two snacks may repeat
        let snacks = (0..Self::snack_count(target_calories))
            .map(|_| pick(catalog, MealType::Snacks, &mut *rng))
            .collect::<Option<Vec<_>>>()?;

        Some(DailyMealSet::new(breakfast, lunch, dinner, snacks))
    }
}

fn pick<R: Rng + ?Sized>(catalog: &MealCatalog, slot: MealType, rng: &mut R) -> Option<MealOption> {
    catalog.slot(slot).choose(rng).cloned()
}
