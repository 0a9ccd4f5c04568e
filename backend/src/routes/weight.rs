//! Weight tracking API routes

use crate::error::ApiError;
use crate::services::weight::WeightService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use fitness_planner_shared::models::WeightEntry;
use fitness_planner_shared::types::{LogWeightRequest, WeightHistoryQuery};
use uuid::Uuid;

/// Create weight routes
pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/weight", post(log_weight))
        .route("/users/:user_id/weight/history", get(get_weight_history))
        .route("/users/:user_id/weight/latest", get(get_latest_weight))
        .route("/users/:user_id/weight/:entry_id", delete(delete_weight_entry))
}

/// POST /api/v1/users/:user_id/weight - Log (or overwrite) the entry for a date
async fn log_weight(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<LogWeightRequest>,
) -> Result<(StatusCode, Json<WeightEntry>), ApiError> {
    let entry = WeightService::log_weight(state.db(), user_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/users/:user_id/weight/history?limit= - Newest first
async fn get_weight_history(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<WeightHistoryQuery>,
) -> Result<Json<Vec<WeightEntry>>, ApiError> {
    let entries = WeightService::get_weight_history(state.db(), user_id, query.limit).await?;
    Ok(Json(entries))
}

/// GET /api/v1/users/:user_id/weight/latest
async fn get_latest_weight(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<WeightEntry>, ApiError> {
    let entry = WeightService::get_latest(state.db(), user_id).await?;
    Ok(Json(entry))
}

/// DELETE /api/v1/users/:user_id/weight/:entry_id
async fn delete_weight_entry(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    WeightService::delete_entry(state.db(), user_id, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
