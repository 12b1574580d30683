//! Error envelope returned by every failing endpoint.
//!
//! All variants map to HTTP 400 with `{"success": false, "error": message}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

use crate::domain::errors::GenerationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No symbols provided")]
    NoSymbols,

    /// Request body was not the expected JSON.
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    Generation(#[from] GenerationError),

    /// The blocking generation task panicked or was cancelled.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        warn!("Request failed: {}", message);

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
