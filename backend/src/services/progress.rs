//! Progress service - dashboard aggregation over stored plans and weights

use crate::error::ApiError;
use crate::services::plan::PlanService;
use crate::services::profile::ProfileService;
use crate::services::weight::WeightService;
use chrono::{Datelike, Utc};
use fitness_planner_shared::models::Day;
use fitness_planner_shared::progress::ProgressReport;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

pub struct ProgressService;

impl ProgressService {
    /// Recompute the dashboard for `today` (name or index; defaults to the UTC weekday)
    pub async fn get_progress(
        db: &PgPool,
        user_id: Uuid,
        today: Option<&str>,
    ) -> Result<ProgressReport, ApiError> {
        let today = resolve_today(today)?;
        let profile = ProfileService::get_profile(db, Some(user_id)).await?;
        let plans = PlanService::load_plans(db, user_id).await?;
        let weights = WeightService::get_all_entries(db, user_id).await?;

        let report = ProgressReport::build(user_id, &plans, &weights, profile.weight_kg, today);
        debug!(
            user_id = %user_id,
            plans = plans.len(),
            streak = report.streak_days,
            average_completion = report.weekly.average_completion,
            "Progress computed"
        );
        Ok(report)
    }
}

fn resolve_today(today: Option<&str>) -> Result<Day, ApiError> {
    match today {
        Some(value) => Ok(Day::parse_ref(value)?),
        None => Ok(Day::from_weekday(Utc::now().weekday())),
    }
}
