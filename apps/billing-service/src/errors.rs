use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    /// C9 exhausted its retries. Surfaced as a non-fatal status at the
    /// handler boundary for `/provider`/`/truck`, but never reaches the
    /// bill handler — the aggregator degrades instead (§4.8).
    #[error("upstream weight-service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<scalehouse_db::DbError> for ApiError {
    fn from(err: scalehouse_db::DbError) -> Self {
        match err {
            scalehouse_db::DbError::UniqueViolation(msg) => ApiError::Duplicate(msg),
            other => ApiError::Internal(anyhow::anyhow!(other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Duplicate(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::UpstreamUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
