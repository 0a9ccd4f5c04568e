//! Weekly plan and completion API routes

use crate::error::ApiError;
use crate::services::plan::PlanService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use fitness_planner_shared::models::{Day, WeeklyPlanEntry};
use fitness_planner_shared::types::{
    CompletionResponse, ExerciseCompletionRequest, GeneratePlanResponse, MealCompletionRequest,
};
use uuid::Uuid;

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/plans", get(get_weekly_plans))
        .route("/users/:user_id/plans/generate", post(generate_weekly_plan))
        .route("/users/:user_id/days/:day", get(get_day_plan))
        .route(
            "/users/:user_id/plans/:plan_id/exercises",
            patch(set_exercise_completion),
        )
        .route("/users/:user_id/plans/:plan_id/meals", patch(set_meal_completion))
}

/// POST /api/v1/users/:user_id/plans/generate - Generate or regenerate the week
async fn generate_weekly_plan(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<GeneratePlanResponse>), ApiError> {
    let response = PlanService::generate_weekly_plan(state.db(), state.catalog(), user_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/users/:user_id/plans - All days, Monday first
async fn get_weekly_plans(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<WeeklyPlanEntry>>, ApiError> {
    let plans = PlanService::get_weekly_plans(state.db(), user_id).await?;
    Ok(Json(plans))
}

/// GET /api/v1/users/:user_id/days/:day - One day by name or index (0 = Monday)
async fn get_day_plan(
    State(state): State<AppState>,
    Path((user_id, day)): Path<(Uuid, String)>,
) -> Result<Json<WeeklyPlanEntry>, ApiError> {
    let day = Day::parse_ref(&day)?;
    let plan = PlanService::get_day_plan(state.db(), user_id, day).await?;
    Ok(Json(plan))
}

/// PATCH /api/v1/users/:user_id/plans/:plan_id/exercises
async fn set_exercise_completion(
    State(state): State<AppState>,
    Path((user_id, plan_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<ExerciseCompletionRequest>,
) -> Result<Json<CompletionResponse>, ApiError> {
    let response = PlanService::set_exercise_completion(
        state.db(),
        state.config().planner.completion_retry_limit,
        user_id,
        plan_id,
        req.exercise_index,
        req.completed,
    )
    .await?;
    Ok(Json(response))
}

/// PATCH /api/v1/users/:user_id/plans/:plan_id/meals
async fn set_meal_completion(
    State(state): State<AppState>,
    Path((user_id, plan_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<MealCompletionRequest>,
) -> Result<Json<CompletionResponse>, ApiError> {
    let response = PlanService::set_meal_completion(
        state.db(),
        state.config().planner.completion_retry_limit,
        user_id,
        plan_id,
        &req.meal_type,
        req.completed,
    )
    .await?;
    Ok(Json(response))
}
