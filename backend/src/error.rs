//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitness_planner_shared::errors::{ParseError, ValidationError};
use fitness_planner_shared::types::{ErrorDetail, ErrorResponse};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::error;

/// Whether 500 responses carry the underlying error text. Set once at startup.
static EXPOSE_ERROR_DETAILS: AtomicBool = AtomicBool::new(false);

pub fn set_expose_error_details(enabled: bool) {
    EXPOSE_ERROR_DETAILS.store(enabled, Ordering::Relaxed);
}

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::Validation(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body; `details` is filled for server errors only when exposed
    pub fn to_body(&self, expose_details: bool) -> ErrorResponse {
        let (code, message, field, details) = match self {
            ApiError::Validation(err) => (
                "VALIDATION_ERROR",
                err.user_message(),
                Some(err.field.to_string()),
                None,
            ),
            ApiError::NotFound(msg) => ("NOT_FOUND", msg.clone(), None, None),
            ApiError::Conflict(msg) => ("CONFLICT", msg.clone(), None, None),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg.clone(), None, None),
            ApiError::Internal(err) => (
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
                expose_details.then(|| serde_json::Value::String(format!("{:#}", err))),
            ),
            ApiError::Database(err) => (
                "DATABASE_ERROR",
                "A database error occurred".to_string(),
                None,
                expose_details.then(|| serde_json::Value::String(err.to_string())),
            ),
        };

        ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                details,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(err) => error!("Internal error: {:?}", err),
            ApiError::Database(err) => error!("Database error: {:?}", err),
            _ => {}
        }

        let body = self.to_body(EXPOSE_ERROR_DETAILS.load(Ordering::Relaxed));
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status_and_field() {
        let error = ApiError::from(ValidationError::new("age", "Age must be between 10 and 100"));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        let body = error.to_body(false);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert_eq!(body.error.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_parse_error_maps_to_field() {
        let error = ApiError::from(ParseError::UnknownMealType("brunch".to_string()));
        let body = error.to_body(false);
        assert_eq!(body.error.field.as_deref(), Some("meal_type"));
        assert!(body.error.message.contains("brunch"));
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Profile not found".to_string());
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_status() {
        let error = ApiError::Conflict("Plan was modified concurrently".to_string());
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_details_only_when_exposed() {
        let error = ApiError::Internal(anyhow::anyhow!("connection reset"));
        assert!(error.to_body(false).error.details.is_none());

        let details = error.to_body(true).error.details.unwrap();
        assert!(details.as_str().unwrap().contains("connection reset"));
        assert_eq!(error.to_body(true).error.message, "An internal error occurred");
    }
}
