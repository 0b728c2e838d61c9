use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::ApiError;
use crate::models::{CreateProviderRequest, ProviderDto};
use crate::repo::provider_repo;
use crate::state::AppState;

pub async fn create_provider(
    State(state): State<AppState>,
    Json(req): Json<CreateProviderRequest>,
) -> Result<(StatusCode, Json<ProviderDto>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > 255 {
        return Err(ApiError::Validation("name must be 1-255 characters".to_string()));
    }

    let conn = state.db.get_connection()?;
    let provider = provider_repo::create(&conn, name).await?;
    Ok((StatusCode::CREATED, Json(provider)))
}

pub async fn rename_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CreateProviderRequest>,
) -> Result<Json<ProviderDto>, ApiError> {
    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > 255 {
        return Err(ApiError::Validation("name must be 1-255 characters".to_string()));
    }

    let conn = state.db.get_connection()?;
    provider_repo::rename(&conn, id, name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("provider {id} not found")))
}
