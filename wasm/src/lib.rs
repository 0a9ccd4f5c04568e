//! Smart Fitness Planner WASM Module
//!
//! Browser bindings over the shared calorie engine and progress helpers, so
//! the dashboard shows exactly the numbers the backend computes.

use fitness_planner_shared::health_metrics::{self, CalorieProfile, MealCalorieSplit};
use fitness_planner_shared::models::{Gender, Goal};
use fitness_planner_shared::progress;
use wasm_bindgen::prelude::*;

fn parse_gender(gender: &str) -> Result<Option<Gender>, String> {
    if gender.is_empty() {
        return Ok(None);
    }
    gender.parse().map(Some).map_err(|e: fitness_planner_shared::ParseError| e.to_string())
}

fn daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
    goal: &str,
) -> Result<i32, String> {
    let goal: Goal = goal.parse().map_err(|e: fitness_planner_shared::ParseError| e.to_string())?;
    let profile = CalorieProfile {
        age_years,
        weight_kg,
        height_cm,
        gender: parse_gender(gender)?,
        goal,
    };
    Ok(health_metrics::calculate_daily_calories(&profile))
}

/// Daily calorie target. `gender` may be empty when unspecified.
#[wasm_bindgen]
pub fn calculate_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
    goal: &str,
) -> Result<i32, JsValue> {
    daily_calories(weight_kg, height_cm, age_years, gender, goal).map_err(|e| JsValue::from_str(&e))
}

/// Per-slot calorie budget as `[breakfast, lunch, dinner, snacks]`
#[wasm_bindgen]
pub fn calculate_meal_split(target_calories: i32) -> Vec<i32> {
    let split = MealCalorieSplit::from_target(target_calories);
    vec![split.breakfast, split.lunch, split.dinner, split.snacks]
}

/// Calculate BMI from weight (kg) and height (cm); 0 for a non-positive height
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    health_metrics::calculate_bmi(weight_kg, height_cm).unwrap_or(0.0)
}

/// Rounded completion percentage
#[wasm_bindgen]
pub fn completion_percent(done: u32, total: u32) -> u32 {
    progress::percent(done, total)
}

/// Trailing moving average for the weight history chart
#[wasm_bindgen]
pub fn weight_moving_average(weights: &[f64], window_size: usize) -> Vec<f64> {
    if weights.is_empty() || window_size == 0 {
        return vec![];
    }

    (0..weights.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window_size);
            let window = &weights[start..=i];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}
