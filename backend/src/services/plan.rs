//! Weekly plan generation and completion tracking
//!
//! Generation composes all seven days in memory first, then writes them one
//! by one. There is no transaction across days: a failure part-way leaves the
//! earlier days written.
//!
//! Completion toggles are read-modify-write guarded by the plan's `version`.
//! A lost race re-reads and re-applies the set operation.

use crate::error::ApiError;
use crate::repositories::{PlanRecord, PlanRepository};
use crate::services::meal::MealSelector;
use crate::services::profile::ProfileService;
use crate::services::workout::WorkoutSelector;
use anyhow::anyhow;
use fitness_planner_shared::catalog::Catalog;
use fitness_planner_shared::health_metrics::{calculate_daily_calories, CalorieProfile};
use fitness_planner_shared::models::{
    CompletedStatus, DailyMealSet, Day, Exercise, Goal, MealType, WeeklyPlanEntry,
};
use fitness_planner_shared::types::{CompletionResponse, GeneratePlanResponse, GeneratedDay};
use fitness_planner_shared::validation::validate_exercise_index;
use fitness_planner_shared::ValidationError;
use metrics::counter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use sqlx::PgPool;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use uuid::Uuid;

const CONFLICT_BACKOFF_BASE_MS: u64 = 10;

/// One composed day, not yet persisted
#[derive(Debug, Clone)]
pub struct DayDraft {
    pub day: Day,
    pub exercises: Vec<Exercise>,
    pub meals: DailyMealSet,
}

pub struct PlanService;

impl PlanService {
    /// Select exercises and meals for every weekday, Monday first
    pub fn compose_week<R: Rng + ?Sized>(
        catalog: &Catalog,
        goal: Goal,
        target_calories: i32,
        rng: &mut R,
    ) -> Result<Vec<DayDraft>, ApiError> {
        let goal_catalog = catalog.for_goal(goal);
        Day::ALL
            .iter()
            .map(|&day| {
                let exercises =
                    WorkoutSelector::select_for_day(&goal_catalog.exercises, goal, day, &mut *rng);
                let meals = MealSelector::select(&goal_catalog.meals, target_calories, &mut *rng)
                    .ok_or_else(|| {
                        ApiError::Internal(anyhow!("meal catalog for {} has an empty slot", goal))
                    })?;
                Ok(DayDraft {
                    day,
                    exercises,
                    meals,
                })
            })
            .collect()
    }

    /// Generate (or regenerate) the user's week
    pub async fn generate_weekly_plan(
        db: &PgPool,
        catalog: &Catalog,
        user_id: Uuid,
    ) -> Result<GeneratePlanResponse, ApiError> {
        let profile = ProfileService::get_profile(db, Some(user_id)).await?;
        let target_calories = calculate_daily_calories(&CalorieProfile::from(&profile));

        let drafts = {
            let mut rng = StdRng::from_entropy();
            Self::compose_week(catalog, profile.goal, target_calories, &mut rng)?
        };

        let mut days = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let written =
                PlanRepository::upsert_day(db, user_id, draft.day, &draft.exercises, &draft.meals)
                    .await
                    .map_err(ApiError::Internal)?;

            let updated = !written.inserted;
            let completion_preserved = updated && has_completion_marks(&written.completed_status);
            if completion_preserved {
                warn!(
                    user_id = %user_id,
                    day = %draft.day,
                    plan_id = %written.id,
                    "Regenerated day keeps its existing completion marks"
                );
            }
            debug!(
                user_id = %user_id,
                day = %draft.day,
                plan_id = %written.id,
                exercises = draft.exercises.len(),
                total_calories = draft.meals.total_calories,
                outcome = if updated { "updated" } else { "created" },
                "Plan day written"
            );
            counter!(
                "planner_plan_days_written_total",
                "outcome" => if updated { "updated" } else { "created" }
            )
            .increment(1);

            days.push(GeneratedDay {
                day: draft.day,
                id: written.id.to_string(),
                updated,
                completion_preserved,
            });
        }

        counter!("planner_plans_generated_total", "goal" => profile.goal.as_str()).increment(1);
        info!(user_id = %user_id, goal = %profile.goal, target_calories, "Weekly plan generated");

        Ok(GeneratePlanResponse {
            user_id: user_id.to_string(),
            goal: profile.goal,
            daily_calorie_target: target_calories,
            days,
        })
    }

    /// All of the user's plans, Monday first. NotFound when there are none.
    pub async fn get_weekly_plans(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WeeklyPlanEntry>, ApiError> {
        let plans = Self::load_plans(db, user_id).await?;
        if plans.is_empty() {
            return Err(ApiError::NotFound("No weekly plan found".to_string()));
        }
        Ok(plans)
    }

    /// Plans for the user, possibly empty, Monday first
    pub async fn load_plans(db: &PgPool, user_id: Uuid) -> Result<Vec<WeeklyPlanEntry>, ApiError> {
        let records = PlanRepository::list_for_user(db, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let mut plans = records
            .into_iter()
            .map(PlanRecord::into_entry)
            .collect::<anyhow::Result<Vec<_>>>()?;
        plans.sort_by_key(|p| p.day);
        Ok(plans)
    }

    pub async fn get_day_plan(
        db: &PgPool,
        user_id: Uuid,
        day: Day,
    ) -> Result<WeeklyPlanEntry, ApiError> {
        let record = PlanRepository::find_by_user_and_day(db, user_id, day)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(format!("No plan found for {}", day)))?;

        Ok(record.into_entry()?)
    }

    pub async fn set_exercise_completion(
        db: &PgPool,
        retry_limit: u32,
        user_id: Uuid,
        plan_id: Uuid,
        exercise_index: i64,
        completed: bool,
    ) -> Result<CompletionResponse, ApiError> {
        let response = Self::update_completion(db, retry_limit, user_id, plan_id, |plan, status| {
            apply_exercise_completion(plan, status, exercise_index, completed)
        })
        .await?;

        if response.changed {
            counter!("planner_completion_updates_total", "kind" => "exercise").increment(1);
        }
        info!(
            user_id = %user_id,
            plan_id = %plan_id,
            exercise_index,
            completed,
            changed = response.changed,
            "Exercise completion set"
        );
        Ok(response)
    }

    pub async fn set_meal_completion(
        db: &PgPool,
        retry_limit: u32,
        user_id: Uuid,
        plan_id: Uuid,
        meal_type: &str,
        completed: bool,
    ) -> Result<CompletionResponse, ApiError> {
        let meal: MealType = meal_type.parse()?;

        let response = Self::update_completion(db, retry_limit, user_id, plan_id, |_, status| {
            Ok(status.set_meal(meal, completed))
        })
        .await?;

        if response.changed {
            counter!("planner_completion_updates_total", "kind" => "meal").increment(1);
        }
        info!(
            user_id = %user_id,
            plan_id = %plan_id,
            meal = %meal,
            completed,
            changed = response.changed,
            "Meal completion set"
        );
        Ok(response)
    }

    /// Compare-and-swap loop shared by both toggles
    ///
    /// `apply` mutates the status copy and reports whether it changed; an
    /// unchanged status is not written back.
    async fn update_completion<F>(
        db: &PgPool,
        retry_limit: u32,
        user_id: Uuid,
        plan_id: Uuid,
        apply: F,
    ) -> Result<CompletionResponse, ApiError>
    where
        F: Fn(&WeeklyPlanEntry, &mut CompletedStatus) -> Result<bool, ValidationError>,
    {
        let attempts = retry_limit.max(1);
        for attempt in 1..=attempts {
            let record = PlanRepository::find_by_id(db, user_id, plan_id)
                .await
                .map_err(ApiError::Internal)?
                .ok_or_else(|| ApiError::NotFound("Plan not found".to_string()))?;
            let version = record.version;
            let plan = record.into_entry()?;

            let mut status = plan.completed_status.clone();
            let changed = apply(&plan, &mut status)?;
            if !changed {
                return Ok(completion_response(&plan, status, false));
            }

            let written = PlanRepository::update_completion(db, plan_id, &status, version)
                .await
                .map_err(ApiError::Internal)?;
            if written.is_some() {
                return Ok(completion_response(&plan, status, true));
            }

            if attempt < attempts {
                let delay = conflict_backoff(attempt, &mut rand::thread_rng());
                debug!(
                    plan_id = %plan_id,
                    attempt,
                    backoff_ms = delay.as_millis() as u64,
                    "Completion write lost a version race, retrying after backoff"
                );
                sleep(delay).await;
            }
        }

        counter!("planner_completion_conflicts_total").increment(1);
        warn!(plan_id = %plan_id, attempts, "Completion write kept conflicting");
        Err(ApiError::Conflict(
            "Plan was modified concurrently, please retry".to_string(),
        ))
    }
}

/// Mark or unmark an exercise
///
/// Marking requires the index to point into the current list. Unmarking only
/// needs a non-negative index, so marks left stale by a regeneration can
/// still be cleared.
pub fn apply_exercise_completion(
    plan: &WeeklyPlanEntry,
    status: &mut CompletedStatus,
    exercise_index: i64,
    completed: bool,
) -> Result<bool, ValidationError> {
    let index = if completed {
        validate_exercise_index(exercise_index, plan.exercises.len())?
    } else {
        validate_exercise_index(exercise_index, usize::MAX)?
    };
    Ok(status.set_exercise(index, completed))
}

fn completion_response(
    plan: &WeeklyPlanEntry,
    completed_status: CompletedStatus,
    changed: bool,
) -> CompletionResponse {
    CompletionResponse {
        plan_id: plan.id.to_string(),
        day: plan.day,
        completed_status,
        changed,
    }
}

/// Exponential backoff (10ms, 20ms, 40ms, ...) plus up to the same again in jitter
fn conflict_backoff<R: Rng + ?Sized>(attempt: u32, rng: &mut R) -> Duration {
    let base_ms = CONFLICT_BACKOFF_BASE_MS << attempt.saturating_sub(1).min(6);
    Duration::from_millis(base_ms + rng.gen_range(0..=base_ms))
}

/// Whether stored completion JSON holds any marks
fn has_completion_marks(value: &Value) -> bool {
    serde_json::from_value::<CompletedStatus>(value.clone())
        .map(|status| !status.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn plan_with(exercise_count: usize) -> WeeklyPlanEntry {
        let catalog = Catalog::builtin();
        WeeklyPlanEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            day: Day::Monday,
            exercises: catalog.exercises(Goal::MuscleGain)[..exercise_count].to_vec(),
            meals: None,
            completed_status: CompletedStatus::default(),
        }
    }

    #[test]
    fn test_compose_week_covers_every_day() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);

        let week = PlanService::compose_week(&catalog, Goal::WeightLoss, 1555, &mut rng).unwrap();

        let days: Vec<Day> = week.iter().map(|d| d.day).collect();
        assert_eq!(days, Day::ALL.to_vec());
        for draft in &week {
            assert!(!draft.exercises.is_empty());
            assert_eq!(draft.meals.snacks.len(), 2);
        }
        assert_eq!(week[6].exercises.len(), 3);
    }

    #[test]
    fn test_compose_week_is_reproducible_with_seed() {
        let catalog = Catalog::builtin();
        let first =
            PlanService::compose_week(&catalog, Goal::Maintenance, 2400, &mut StdRng::seed_from_u64(5))
                .unwrap();
        let second =
            PlanService::compose_week(&catalog, Goal::Maintenance, 2400, &mut StdRng::seed_from_u64(5))
                .unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.exercises, b.exercises);
            assert_eq!(a.meals, b.meals);
        }
    }

    #[test]
    fn test_marking_index_two() {
        let plan = plan_with(4);
        let mut status = CompletedStatus::default();
        status.set_exercise(0, true);
        status.set_exercise(1, true);

        let changed = apply_exercise_completion(&plan, &mut status, 2, true).unwrap();

        assert!(changed);
        assert_eq!(status.exercises.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let plan = plan_with(3);
        let mut status = CompletedStatus::default();

        let err = apply_exercise_completion(&plan, &mut status, 3, true).unwrap_err();
        assert_eq!(err.field, "exercise_index");
        assert!(apply_exercise_completion(&plan, &mut status, -1, true).is_err());
        assert!(status.is_empty());
    }

    #[test]
    fn test_stale_index_can_be_unmarked() {
        // list shrank from six exercises to five after a regeneration
        let plan = plan_with(5);
        let mut status = CompletedStatus::default();
        status.set_exercise(5, true);

        let changed = apply_exercise_completion(&plan, &mut status, 5, false).unwrap();

        assert!(changed);
        assert!(status.is_empty());
        assert!(!apply_exercise_completion(&plan, &mut status, 9, false).unwrap());
        assert!(apply_exercise_completion(&plan, &mut status, -1, false).is_err());
    }

    #[test]
    fn test_conflict_backoff_grows_with_attempts() {
        let mut rng = StdRng::seed_from_u64(3);
        for attempt in 1..=4u32 {
            let base = 10u64 << (attempt - 1);
            let delay = conflict_backoff(attempt, &mut rng).as_millis() as u64;
            assert!((base..=base * 2).contains(&delay), "attempt {}: {}ms", attempt, delay);
        }
    }

    #[test]
    fn test_completion_marks_detection() {
        assert!(!has_completion_marks(&json!({"exercises": [], "meals": []})));
        assert!(has_completion_marks(&json!({"exercises": [1], "meals": []})));
        assert!(has_completion_marks(&json!({"exercises": [], "meals": ["dinner"]})));
        assert!(!has_completion_marks(&json!("garbage")));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_repeat_mark_reports_unchanged(index in 0i64..5) {
            let plan = plan_with(5);
            let mut status = CompletedStatus::default();

            prop_assert!(apply_exercise_completion(&plan, &mut status, index, true).unwrap());
            let snapshot = status.clone();
            prop_assert!(!apply_exercise_completion(&plan, &mut status, index, true).unwrap());
            prop_assert_eq!(status, snapshot);
        }

        #[test]
        fn prop_mark_unmark_round_trip(
            initial in prop::collection::btree_set(0usize..5, 0..5),
            index in 0i64..5
        ) {
            let plan = plan_with(5);
            let original = CompletedStatus { exercises: initial, meals: Default::default() };
            prop_assume!(!original.is_exercise_completed(index as usize));

            let mut status = original.clone();
            apply_exercise_completion(&plan, &mut status, index, true).unwrap();
            apply_exercise_completion(&plan, &mut status, index, false).unwrap();
            prop_assert_eq!(status, original);
        }
    }
}
