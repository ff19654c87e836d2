//! Application error types and the gateway error-mapping table.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::upstream::ForwardError;
use crate::validate::ValidationError;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed client input. Always 400, never logged as an error.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Upstream unreachable (connection refused).
    #[error("AI service unreachable")]
    UpstreamUnreachable,

    /// Upstream hostname did not resolve.
    #[error("AI service hostname unresolvable")]
    UpstreamUnresolvable,

    /// Upstream answered non-2xx; status and body relayed verbatim.
    #[error("AI service rejected the request with status {status}")]
    UpstreamRejected { status: u16, body: String },

    /// Anything else. The message is the route's generic client-facing
    /// detail; the underlying cause is already logged where it occurred.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Folds a classified forwarding failure into the response mapping.
    ///
    /// `fallback` is the route-specific generic detail used for failures
    /// the table maps to a plain 500 (timeouts and unclassified errors).
    pub fn upstream(err: ForwardError, fallback: &str) -> Self {
        match err {
            ForwardError::ConnectionRefused => AppError::UpstreamUnreachable,
            ForwardError::NameResolutionFailed => AppError::UpstreamUnresolvable,
            ForwardError::UpstreamHttp { status, body } => {
                AppError::UpstreamRejected { status, body }
            }
            ForwardError::Timeout | ForwardError::Other(_) => {
                AppError::Internal(fallback.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            AppError::UpstreamUnreachable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI service is currently unavailable. Please try again later.".to_string(),
                Some("Unable to connect to sentiment analysis service".to_string()),
            ),
            AppError::UpstreamUnresolvable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI service configuration error".to_string(),
                Some("Cannot resolve AI service hostname".to_string()),
            ),
            AppError::UpstreamRejected { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "AI service error".to_string(),
                Some(body),
            ),
            AppError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(detail),
            ),
        };
        (status, Json(ErrorResponse { error, details })).into_response()
    }
}

/// Final catch-all: turns a handler panic into the 500 JSON shape.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
            details: None,
        }),
    )
        .into_response()
}
