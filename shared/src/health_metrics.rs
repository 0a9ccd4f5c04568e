//! Health metrics calculations module
//!
//! Daily calorie target (Mifflin-St Jeor BMR, one activity multiplier, goal
//! adjustment), the per-meal calorie split, BMI and protein target.
//!
//! All functions are pure. Every entry point (backend, wasm) uses the same
//! [`ACTIVITY_MULTIPLIER`], so a profile always maps to one calorie target.

use crate::models::{Gender, Goal, Profile};
use serde::{Deserialize, Serialize};

/// Activity multiplier applied to BMR (sedentary-to-moderate)
pub const ACTIVITY_MULTIPLIER: f64 = 1.5;

/// Daily deficit for weight loss (kcal)
pub const WEIGHT_LOSS_DEFICIT: f64 = 500.0;

/// Daily surplus for muscle gain (kcal)
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Protein grams per kg of body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;

// ============================================================================
// Calorie Target
// ============================================================================

/// Inputs of the calorie engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieProfile {
    pub age_years: i32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Option<Gender>,
    pub goal: Goal,
}

impl From<&Profile> for CalorieProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            age_years: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            gender: profile.gender,
            goal: profile.goal,
        }
    }
}

/// Calculate BMR using Mifflin-St Jeor equation
///
/// BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + s,
/// where s = -161 for female and +5 otherwise (including unspecified).
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: Option<Gender>,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Some(Gender::Female) => base - 161.0,
        _ => base + 5.0,
    }
}

/// Calorie offset applied on top of maintenance calories
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -WEIGHT_LOSS_DEFICIT,
        Goal::MuscleGain => MUSCLE_GAIN_SURPLUS,
        Goal::Maintenance => 0.0,
    }
}

/// Calculate the daily calorie target, rounded to the nearest kcal
pub fn calculate_daily_calories(profile: &CalorieProfile) -> i32 {
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let maintenance = bmr * ACTIVITY_MULTIPLIER;
    (maintenance + goal_adjustment(profile.goal)).round() as i32
}

// ============================================================================
// Meal Split
// ============================================================================

/// Share of the daily target per meal slot
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.30;
pub const SNACK_SHARE: f64 = 0.10;

/// Calorie budget of each meal slot for a daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCalorieSplit {
    pub breakfast: i32,
    pub lunch: i32,
    pub dinner: i32,
    pub snacks: i32,
}

impl MealCalorieSplit {
    pub fn from_target(target_calories: i32) -> Self {
        let share = |fraction: f64| (target_calories as f64 * fraction).round() as i32;
        Self {
            breakfast: share(BREAKFAST_SHARE),
            lunch: share(LUNCH_SHARE),
            dinner: share(DINNER_SHARE),
            snacks: share(SNACK_SHARE),
        }
    }
}

// ============================================================================
// Body Metrics
// ============================================================================

/// Calculate BMI (kg/m²). None when height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Daily protein target in grams
pub fn calculate_protein_target_g(weight_kg: f64) -> i32 {
    (weight_kg * PROTEIN_G_PER_KG).round() as i32
}

/// Round to one decimal place for display
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
