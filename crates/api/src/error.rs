//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures unexpected errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Error bodies are JSON: `{"message": ...}` plus a
//! field-level `errors` array for validation failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::ai::AiError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation at the boundary. Checked before any
    /// mutation; nothing is persisted when this fires.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// AI provider failure that escaped the degrade-to-fallback paths.
    #[error("AI provider error: {0}")]
    Upstream(#[from] AiError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure for a single missing field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(vec![FieldError::missing(field)])
    }
}

/// One offending field in a validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Wire name of the field (camelCase, dotted for nested items).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl FieldError {
    /// A field error with an explicit message.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A "field is required" error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture unexpected errors to Sentry
        if matches!(self, Self::Internal(_) | Self::Upstream(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let body = match self {
            Self::Validation(errors) => ErrorBody {
                message: "Invalid request data".to_string(),
                errors: Some(errors),
            },
            Self::NotFound(what) => ErrorBody {
                message: format!("{what} not found"),
                errors: None,
            },
            Self::Upstream(_) | Self::Internal(_) => ErrorBody {
                message: "Internal server error".to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
