//! Profile API routes

use crate::error::ApiError;
use crate::services::profile::ProfileService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use fitness_planner_shared::types::{
    CreateProfileRequest, ProfileQuery, ProfileResponse, UpdateProfileRequest,
};
use uuid::Uuid;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(create_profile).get(get_profile))
        .route("/users/:user_id", put(update_profile))
}

/// POST /api/v1/profile - Create a profile
async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let profile = ProfileService::create_profile(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(&profile))))
}

/// GET /api/v1/profile?user_id= - Fetch a profile, latest-created when no id is given
async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::get_profile(state.db(), query.user_id).await?;
    Ok(Json(ProfileResponse::from(&profile)))
}

/// PUT /api/v1/users/:user_id - Partial profile update
async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = ProfileService::update_profile(state.db(), user_id, req).await?;
    Ok(Json(ProfileResponse::from(&profile)))
}
