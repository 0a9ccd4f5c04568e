//! Dashboard aggregation
//!
//! Everything here is recomputed on read from the stored plans and weight
//! entries; nothing is persisted.

use crate::models::{Day, MealType, WeeklyPlanEntry, WeightEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estimated burn per planned exercise (kcal)
pub const CALORIES_PER_EXERCISE: u32 = 50;

/// Meal slots tracked per day
pub const MEAL_SLOTS_PER_DAY: u32 = MealType::ALL.len() as u32;

/// Streak lookback window (days)
pub const MAX_STREAK_DAYS: usize = 7;

pub const FIRST_WEEK_COMPLETION_TARGET: u32 = 50;
pub const TEN_WORKOUTS_TARGET: u32 = 10;
pub const WEIGHT_LOSS_TARGET_KG: f64 = 5.0;
pub const STREAK_TARGET_DAYS: u32 = 30;

/// Rounded percentage; 0 when there is nothing to complete
pub fn percent(done: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

/// Completed exercises that still point into the current exercise list
fn completed_exercise_count(plan: &WeeklyPlanEntry) -> u32 {
    plan.completed_status
        .exercises
        .iter()
        .filter(|&&index| index < plan.exercises.len())
        .count() as u32
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub day: Day,
    pub plan_id: Uuid,
    pub total_exercises: u32,
    pub completed_exercises: u32,
    pub workout_completion_pct: u32,
    pub completed_meals: u32,
    pub meal_completion_pct: u32,
    pub target_calories: u32,
    pub consumed_calories: u32,
    pub estimated_calories_burned: u32,
}

impl DayProgress {
    pub fn from_plan(plan: &WeeklyPlanEntry) -> Self {
        let total_exercises = plan.exercises.len() as u32;
        let completed_exercises = completed_exercise_count(plan);
        let completed_meals = plan.completed_status.meals.len() as u32;

        let (target_calories, consumed_calories) = match &plan.meals {
            Some(meals) => (
                meals.total_calories,
                plan.completed_status
                    .meals
                    .iter()
                    .map(|&slot| meals.slot_calories(slot))
                    .sum(),
            ),
            None => (0, 0),
        };

        Self {
            day: plan.day,
            plan_id: plan.id,
            total_exercises,
            completed_exercises,
            workout_completion_pct: percent(completed_exercises, total_exercises),
            completed_meals,
            meal_completion_pct: percent(completed_meals, MEAL_SLOTS_PER_DAY),
            target_calories,
            consumed_calories,
            estimated_calories_burned: CALORIES_PER_EXERCISE * total_exercises,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub total_exercises: u32,
    pub completed_exercises: u32,
    pub total_meals: u32,
    pub completed_meals: u32,
    pub target_calories: u32,
    pub consumed_calories: u32,
    pub workout_completion_rate: u32,
    pub meal_completion_rate: u32,
    pub average_completion: u32,
}

impl WeeklySummary {
    pub fn from_days(days: &[DayProgress]) -> Self {
        let mut summary = days.iter().fold(WeeklySummary::default(), |mut acc, day| {
            acc.total_exercises += day.total_exercises;
            acc.completed_exercises += day.completed_exercises;
            acc.total_meals += MEAL_SLOTS_PER_DAY;
            acc.completed_meals += day.completed_meals;
            acc.target_calories += day.target_calories;
            acc.consumed_calories += day.consumed_calories;
            acc
        });

        summary.workout_completion_rate =
            percent(summary.completed_exercises, summary.total_exercises);
        summary.meal_completion_rate = percent(summary.completed_meals, summary.total_meals);
        summary.average_completion = ((summary.workout_completion_rate
            + summary.meal_completion_rate) as f64
            / 2.0)
            .round() as u32;
        summary
    }
}

/// Consecutive days, walking back from `today`, with at least one completed exercise
pub fn completion_streak(plans: &[WeeklyPlanEntry], today: Day) -> u32 {
    let mut streak = 0;
    let mut day = today;
    for _ in 0..MAX_STREAK_DAYS {
        let active = plans
            .iter()
            .find(|plan| plan.day == day)
            .map(|plan| !plan.exercises.is_empty() && completed_exercise_count(plan) > 0)
            .unwrap_or(false);
        if !active {
            break;
        }
        streak += 1;
        day = day.previous();
    }
    streak
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightChange {
    pub starting_weight_kg: f64,
    pub current_weight_kg: f64,
    pub weight_lost_kg: f64,
}

impl WeightChange {
    /// Oldest entry vs latest entry, falling back to the profile weight
    pub fn from_entries(entries: &[WeightEntry], profile_weight_kg: f64) -> Self {
        let oldest = entries.iter().min_by_key(|e| e.recorded_date);
        let latest = entries.iter().max_by_key(|e| e.recorded_date);

        let starting_weight_kg = oldest.map(|e| e.weight_kg).unwrap_or(profile_weight_kg);
        let current_weight_kg = latest.map(|e| e.weight_kg).unwrap_or(profile_weight_kg);

        Self {
            starting_weight_kg,
            current_weight_kg,
            weight_lost_kg: (starting_weight_kg - current_weight_kg).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    FirstWeek,
    TenWorkouts,
    WeightLoss,
    Streak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementKind,
    pub title: String,
    pub earned: bool,
    /// Capped at 100
    pub progress_pct: u32,
}

impl Achievement {
    fn new(id: AchievementKind, title: &str, earned: bool, progress: f64) -> Self {
        Self {
            id,
            title: title.to_string(),
            earned,
            progress_pct: progress.round().clamp(0.0, 100.0) as u32,
        }
    }
}

/// Earned flags and progress (capped at 100) for every achievement
///
/// The streak achievement targets 30 days while the streak itself is counted
/// over at most 7, so it is never earned and tops out at 23% progress.
pub fn evaluate_achievements(
    plan_count: usize,
    summary: &WeeklySummary,
    streak_days: u32,
    weight: &WeightChange,
) -> Vec<Achievement> {
    vec![
        Achievement::new(
            AchievementKind::FirstWeek,
            "First Week",
            plan_count >= Day::ALL.len()
                && summary.average_completion >= FIRST_WEEK_COMPLETION_TARGET,
            summary.average_completion as f64 / FIRST_WEEK_COMPLETION_TARGET as f64 * 100.0,
        ),
        Achievement::new(
            AchievementKind::TenWorkouts,
            "Ten Workouts",
            summary.completed_exercises >= TEN_WORKOUTS_TARGET,
            summary.completed_exercises as f64 / TEN_WORKOUTS_TARGET as f64 * 100.0,
        ),
        Achievement::new(
            AchievementKind::WeightLoss,
            "Lost 5 kg",
            weight.weight_lost_kg >= WEIGHT_LOSS_TARGET_KG,
            weight.weight_lost_kg / WEIGHT_LOSS_TARGET_KG * 100.0,
        ),
        Achievement::new(
            AchievementKind::Streak,
            "30 Day Streak",
            streak_days >= STREAK_TARGET_DAYS,
            streak_days as f64 / STREAK_TARGET_DAYS as f64 * 100.0,
        ),
    ]
}

/// Full dashboard for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub user_id: Uuid,
    pub today: Day,
    pub days: Vec<DayProgress>,
    pub weekly: WeeklySummary,
    pub streak_days: u32,
    pub weight: WeightChange,
    pub achievements: Vec<Achievement>,
}

impl ProgressReport {
    pub fn build(
        user_id: Uuid,
        plans: &[WeeklyPlanEntry],
        weight_entries: &[WeightEntry],
        profile_weight_kg: f64,
        today: Day,
    ) -> Self {
        let mut days: Vec<DayProgress> = plans.iter().map(DayProgress::from_plan).collect();
        days.sort_by_key(|d| d.day);

        let weekly = WeeklySummary::from_days(&days);
        let streak_days = completion_streak(plans, today);
        let weight = WeightChange::from_entries(weight_entries, profile_weight_kg);
        let achievements = evaluate_achievements(plans.len(), &weekly, streak_days, &weight);

        Self {
            user_id,
            today,
            days,
            weekly,
            streak_days,
            weight,
            achievements,
        }
    }
}
