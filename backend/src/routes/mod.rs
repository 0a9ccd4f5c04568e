//! Route definitions for the Smart Fitness Planner API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod plans;
mod profile;
mod progress;
mod weight;

pub use plans::plan_routes;
pub use profile::profile_routes;
pub use progress::progress_routes;
pub use weight::weight_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(health::metrics))
        .nest("/api/v1", api_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Smart Fitness Planner API v1" }))
        .merge(profile_routes())
        .merge(plan_routes())
        .merge(weight_routes())
        .merge(progress_routes())
}
