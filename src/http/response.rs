//! Error-to-response mapping.
//!
//! # Responsibilities
//! - Map upstream failures to client-visible HTTP responses
//! - Log every failure server-side
//!
//! # Design Decisions
//! - A failure carrying status and status text is replayed as-is:
//!   that status with a plain-text `"<code> <text>"` body
//! - Every other failure is a 500 with the serialised error as JSON
//! - Clients never receive partial results

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Handler-level error type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Malformed client input.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Upstream(e) => e.kind(),
            ApiError::BadRequest(_) => "bad_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Upstream failure");

                if let Some((status, status_text)) = err.status() {
                    let code =
                        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                    return (code, format!("{} {}", status, status_text)).into_response();
                }

                let body = json!({
                    "error": err.kind(),
                    "message": err.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                let body = json!({
                    "error": self.kind(),
                    "message": msg,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
