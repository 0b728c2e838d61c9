use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use scalehouse_weight_core::WeightCoreError;
use thiserror::Error;

/// The error kinds §7 names, mapped 1:1 onto HTTP statuses at the handler
/// boundary. Storage-layer exception types never reach a client directly.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    SequenceViolation(String),

    #[error("{0}")]
    ContainerUnknown(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<WeightCoreError> for ApiError {
    fn from(err: WeightCoreError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<scalehouse_db::DbError> for ApiError {
    fn from(err: scalehouse_db::DbError) -> Self {
        ApiError::Internal(anyhow::anyhow!(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::SequenceViolation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::ContainerUnknown(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
