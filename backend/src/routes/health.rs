//! Health and metrics endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (database reachable, catalogs loaded)
//! - /health/live - Liveness probe
//! - /metrics - Prometheus exposition, when the recorder is installed

use crate::{db, state::AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use fitness_planner_shared::models::Goal;
use serde::Serialize;

const SERVICE_NAME: &str = "fitness-planner";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

impl HealthResponse {
    fn new(status: &'static str, checks: Option<ReadinessChecks>) -> Self {
        Self {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub database: CheckStatus,
    pub catalog: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    fn ok() -> Self {
        Self {
            healthy: true,
            message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: Some(message.into()),
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", None))
}

/// Readiness probe; 503 when any check fails
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = match db::health_check(state.db()).await {
        Ok(()) => CheckStatus::ok(),
        Err(e) => CheckStatus::failed(e.to_string()),
    };

    let empty_goals: Vec<&str> = Goal::ALL
        .iter()
        .filter(|&&goal| state.catalog().exercises(goal).is_empty())
        .map(|goal| goal.as_str())
        .collect();
    let catalog = if empty_goals.is_empty() {
        CheckStatus::ok()
    } else {
        CheckStatus::failed(format!("no exercises for: {}", empty_goals.join(", ")))
    };

    let ready = database.healthy && catalog.healthy;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthResponse::new(
        if ready { "ready" } else { "not_ready" },
        Some(ReadinessChecks { database, catalog }),
    );

    (status, Json(body))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive", None))
}

/// Prometheus text format; 404 when metrics are disabled
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "fitness-planner");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
        assert!(response.checks.is_none());
    }
}
