use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    /// Structurally well-formed but semantically invalid candidate input
    /// (product outside the closed vocabulary, non-positive counts, an
    /// over-long name) — maps to 422 per spec.md §6, matching the source
    /// FastAPI/Pydantic behavior it was derived from.
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    /// Zero rows updated by a versioned UPDATE: the candidate advanced,
    /// was already approved/rejected, or vanished between read and write (§4.10).
    #[error("{0}")]
    ConcurrentModification(String),

    /// C12 (billing client) exhausted its retries or hit a non-retriable status.
    #[error("upstream billing-service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("missing or invalid bearer token")]
    Unauthorized,

    #[error("admin identity required")]
    Forbidden,

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
            ApiError::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Duplicate(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::ConcurrentModification(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::UpstreamUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
