//! Weight entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Weight entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeightEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: Decimal,
    pub recorded_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for logging a weight entry
#[derive(Debug, Clone)]
pub struct UpsertWeightEntry {
    pub user_id: Uuid,
    pub weight_kg: f64,
    pub recorded_date: NaiveDate,
    pub notes: Option<String>,
}

const WEIGHT_COLUMNS: &str = "id, user_id, weight_kg, recorded_date, notes, created_at, updated_at";

/// Weight repository for database operations
pub struct WeightRepository;

impl WeightRepository {
    /// Insert an entry, or overwrite the one already recorded for that date
    pub async fn upsert(pool: &PgPool, input: UpsertWeightEntry) -> Result<WeightEntryRecord> {
        let record = sqlx::query_as::<_, WeightEntryRecord>(&format!(
            r#"
            INSERT INTO weight_entries (user_id, weight_kg, recorded_date, notes)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, recorded_date) DO UPDATE SET
                weight_kg = EXCLUDED.weight_kg,
                notes = EXCLUDED.notes,
                updated_at = NOW()
            RETURNING {WEIGHT_COLUMNS}
            "#
        ))
        .bind(input.user_id)
        .bind(input.weight_kg)
        .bind(input.recorded_date)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the N most recent entries for a user, newest first
    pub async fn get_recent(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<WeightEntryRecord>> {
        let records = sqlx::query_as::<_, WeightEntryRecord>(&format!(
            r#"
            SELECT {WEIGHT_COLUMNS}
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY recorded_date DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Every entry for a user, oldest first
    pub async fn get_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<WeightEntryRecord>> {
        let records = sqlx::query_as::<_, WeightEntryRecord>(&format!(
            r#"
            SELECT {WEIGHT_COLUMNS}
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY recorded_date ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the most recent entry for a user
    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<WeightEntryRecord>> {
        let record = sqlx::query_as::<_, WeightEntryRecord>(&format!(
            r#"
            SELECT {WEIGHT_COLUMNS}
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY recorded_date DESC
            LIMIT 1
            "#
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete an entry owned by the user
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM weight_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
