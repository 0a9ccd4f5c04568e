//! Progress dashboard API routes

use crate::error::ApiError;
use crate::services::progress::ProgressService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use fitness_planner_shared::progress::ProgressReport;
use fitness_planner_shared::types::ProgressQuery;
use uuid::Uuid;

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/progress", get(get_progress))
}

/// GET /api/v1/users/:user_id/progress?today=
async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressReport>, ApiError> {
    let report = ProgressService::get_progress(state.db(), user_id, query.today.as_deref()).await?;
    Ok(Json(report))
}
