//! Weekly plan repository for database operations
//!
//! `exercises`, `meals` and `completed_status` are JSONB columns. They are
//! written from typed values and read back leniently: a value that no longer
//! decodes degrades to an empty default and logs a warning.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fitness_planner_shared::models::{
    CompletedStatus, DailyMealSet, Day, Exercise, WeeklyPlanEntry,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Weekly plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: String,
    pub exercises: Value,
    pub meals: Value,
    pub completed_status: Value,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanRecord {
    /// Decode the JSON columns, substituting defaults for malformed values
    pub fn into_entry(self) -> Result<WeeklyPlanEntry> {
        let day: Day = self
            .day
            .parse()
            .with_context(|| format!("plan {} has unknown day '{}'", self.id, self.day))?;

        let exercises: Vec<Exercise> =
            decode_lenient(self.id, "exercises", self.exercises).unwrap_or_default();
        let meals: Option<DailyMealSet> = decode_lenient(self.id, "meals", self.meals);
        let completed_status: CompletedStatus =
            decode_lenient(self.id, "completed_status", self.completed_status).unwrap_or_default();

        Ok(WeeklyPlanEntry {
            id: self.id,
            user_id: self.user_id,
            day,
            exercises,
            meals,
            completed_status,
        })
    }
}

fn decode_lenient<T: DeserializeOwned>(plan_id: Uuid, column: &'static str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(plan_id = %plan_id, column, error = %e, "Malformed stored plan JSON, using default");
            None
        }
    }
}

/// Result of writing one generated day
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UpsertedPlan {
    pub id: Uuid,
    /// False when an existing (user, day) row was overwritten
    pub inserted: bool,
    /// Completion marks as they stand after the write
    pub completed_status: Value,
}

const PLAN_COLUMNS: &str =
    "id, user_id, day, exercises, meals, completed_status, version, created_at, updated_at";

/// Weekly plan repository for database operations
pub struct PlanRepository;

impl PlanRepository {
    /// Insert a day's plan or replace its exercises and meals
    ///
    /// Completion marks are written only on insert; an update leaves them as
    /// they are. Every write bumps `version`.
    pub async fn upsert_day(
        pool: &PgPool,
        user_id: Uuid,
        day: Day,
        exercises: &[Exercise],
        meals: &DailyMealSet,
    ) -> Result<UpsertedPlan> {
        let record = sqlx::query_as::<_, UpsertedPlan>(
            r#"
            INSERT INTO weekly_plans (user_id, day, exercises, meals, completed_status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, day) DO UPDATE SET
                exercises = EXCLUDED.exercises,
                meals = EXCLUDED.meals,
                version = weekly_plans.version + 1,
                updated_at = NOW()
            RETURNING id, (xmax = 0) AS inserted, completed_status
            "#,
        )
        .bind(user_id)
        .bind(day.as_str())
        .bind(serde_json::to_value(exercises)?)
        .bind(serde_json::to_value(meals)?)
        .bind(serde_json::to_value(CompletedStatus::default())?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_user_and_day(
        pool: &PgPool,
        user_id: Uuid,
        day: Day,
    ) -> Result<Option<PlanRecord>> {
        let record = sqlx::query_as::<_, PlanRecord>(&format!(
            "SELECT {PLAN_COLUMNS} FROM weekly_plans WHERE user_id = $1 AND day = $2"
        ))
        .bind(user_id)
        .bind(day.as_str())
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// A plan by id, scoped to its owner
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: Uuid,
        plan_id: Uuid,
    ) -> Result<Option<PlanRecord>> {
        let record = sqlx::query_as::<_, PlanRecord>(&format!(
            "SELECT {PLAN_COLUMNS} FROM weekly_plans WHERE id = $1 AND user_id = $2"
        ))
        .bind(plan_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<PlanRecord>> {
        let records = sqlx::query_as::<_, PlanRecord>(&format!(
            "SELECT {PLAN_COLUMNS} FROM weekly_plans WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Compare-and-swap write of the completion marks
    ///
    /// Returns the new version, or `None` when the row's version no longer
    /// matches `expected_version`.
    pub async fn update_completion(
        pool: &PgPool,
        plan_id: Uuid,
        status: &CompletedStatus,
        expected_version: i64,
    ) -> Result<Option<i64>> {
        let version: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE weekly_plans
            SET completed_status = $2, version = version + 1, updated_at = NOW()
            WHERE id = $1 AND version = $3
            RETURNING version
            "#,
        )
        .bind(plan_id)
        .bind(serde_json::to_value(status)?)
        .bind(expected_version)
        .fetch_optional(pool)
        .await?;

        Ok(version)
    }
}
