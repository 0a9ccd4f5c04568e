//! Profile repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub height_cm: Decimal,
    pub weight_kg: Decimal,
    pub goal: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a profile; values are already validated
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub name: String,
    pub age: i32,
    pub gender: Option<String>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: String,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
}

const PROFILE_COLUMNS: &str =
    "id, name, age, gender, height_cm, weight_kg, goal, created_at, updated_at";

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn create(pool: &PgPool, input: CreateProfile) -> Result<ProfileRecord> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            INSERT INTO profiles (name, age, gender, height_cm, weight_kg, goal)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(&input.goal)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// The most recently created profile
    pub async fn find_latest(pool: &PgPool) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC LIMIT 1"
        ))
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: UpdateProfile,
    ) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE profiles SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender),
                height_cm = COALESCE($5, height_cm),
                weight_kg = COALESCE($6, weight_kg),
                goal = COALESCE($7, goal),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(&input.goal)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
