//! Weight tracking service
//!
//! One entry per user per date; logging the same date again overwrites it.

use crate::error::ApiError;
use crate::repositories::{UpsertWeightEntry, WeightEntryRecord, WeightRepository};
use crate::services::profile::{decimal_to_f64, ProfileService};
use chrono::Utc;
use fitness_planner_shared::models::WeightEntry;
use fitness_planner_shared::types::LogWeightRequest;
use fitness_planner_shared::validation::{
    validate_notes, validate_recorded_date, validate_weight_kg,
};
use fitness_planner_shared::ValidationError;
use metrics::counter;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: i64 = 30;
pub const MAX_HISTORY_LIMIT: i64 = 365;

/// Weight service for business logic
pub struct WeightService;

impl WeightService {
    /// Validate and upsert a weight entry for the request's date
    pub async fn log_weight(
        pool: &PgPool,
        user_id: Uuid,
        req: LogWeightRequest,
    ) -> Result<WeightEntry, ApiError> {
        let input = Self::validate_log(user_id, req)?;
        ProfileService::ensure_exists(pool, user_id).await?;

        let record = WeightRepository::upsert(pool, input)
            .await
            .map_err(ApiError::Internal)?;

        counter!("planner_weight_entries_total").increment(1);
        info!(
            user_id = %user_id,
            recorded_date = %record.recorded_date,
            "Weight entry logged"
        );
        Ok(to_entry(record))
    }

    pub fn validate_log(user_id: Uuid, req: LogWeightRequest) -> Result<UpsertWeightEntry, ApiError> {
        validate_weight_kg(req.weight_kg)?;
        validate_notes(req.notes.as_deref())?;
        let recorded_date = match req.recorded_date.as_deref() {
            Some(date) => validate_recorded_date(date)?,
            None => Utc::now().date_naive(),
        };

        Ok(UpsertWeightEntry {
            user_id,
            weight_kg: req.weight_kg,
            recorded_date,
            notes: req.notes.filter(|n| !n.trim().is_empty()),
        })
    }

    /// Most recent entries first
    pub async fn get_weight_history(
        pool: &PgPool,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<WeightEntry>, ApiError> {
        let limit = history_limit(limit)?;
        let records = WeightRepository::get_recent(pool, user_id, limit)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_entry).collect())
    }

    /// Every entry, oldest first
    pub async fn get_all_entries(pool: &PgPool, user_id: Uuid) -> Result<Vec<WeightEntry>, ApiError> {
        let records = WeightRepository::get_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_entry).collect())
    }

    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<WeightEntry, ApiError> {
        WeightRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(to_entry)
            .ok_or_else(|| ApiError::NotFound("No weight entries found".to_string()))
    }

    pub async fn delete_entry(pool: &PgPool, user_id: Uuid, entry_id: Uuid) -> Result<(), ApiError> {
        let deleted = WeightRepository::delete(pool, entry_id, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if !deleted {
            return Err(ApiError::NotFound("Weight entry not found".to_string()));
        }

        info!(user_id = %user_id, entry_id = %entry_id, "Weight entry deleted");
        Ok(())
    }
}

fn history_limit(limit: Option<i64>) -> Result<i64, ValidationError> {
    match limit {
        None => Ok(DEFAULT_HISTORY_LIMIT),
        Some(n) if (1..=MAX_HISTORY_LIMIT).contains(&n) => Ok(n),
        Some(_) => Err(ValidationError::new(
            "limit",
            format!("Limit must be between 1 and {}", MAX_HISTORY_LIMIT),
        )),
    }
}

fn to_entry(record: WeightEntryRecord) -> WeightEntry {
    WeightEntry {
        id: record.id,
        user_id: record.user_id,
        weight_kg: decimal_to_f64(&record.weight_kg),
        recorded_date: record.recorded_date,
        notes: record.notes,
    }
}
