use axum::extract::State;
use axum::Json;
use scalehouse_weight_core::{lbs_to_kg, validate_container_id, validate_weight_kg, Unit};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::{BatchUpsertResult, RegisterContainerRequest, RegisterContainerResponse};
use crate::repo::container_repo::{self, UpsertOutcome};
use crate::service::batch;
use crate::state::AppState;

pub async fn register_container(
    State(state): State<AppState>,
    Json(req): Json<RegisterContainerRequest>,
) -> Result<Json<RegisterContainerResponse>, ApiError> {
    validate_container_id(&req.id)?;
    let unit = req.unit.unwrap_or(Unit::Kg);
    let weight_kg = match req.weight {
        Some(w) => {
            let kg = match unit {
                Unit::Kg => w,
                Unit::Lbs => lbs_to_kg(w),
            };
            validate_weight_kg(kg)?;
            Some(kg)
        }
        None => None,
    };

    let conn = state.db.get_connection()?;
    let outcome = container_repo::upsert(&conn, &req.id, weight_kg, unit, req.allow_update).await?;

    match outcome {
        UpsertOutcome::Created => Ok(Json(RegisterContainerResponse { id: req.id, status: "created" })),
        UpsertOutcome::Updated => Ok(Json(RegisterContainerResponse { id: req.id, status: "updated" })),
        UpsertOutcome::Rejected(reason) => Err(ApiError::Validation(reason)),
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchWeightRequest {
    pub file: String,
    #[serde(default)]
    pub allow_updates: bool,
    #[serde(default)]
    pub skip_duplicates: bool,
}

pub async fn post_batch_weight(
    State(state): State<AppState>,
    Json(req): Json<BatchWeightRequest>,
) -> Result<Json<BatchUpsertResult>, ApiError> {
    let path = batch::resolve_ingest_path(&state.config.ingest_dir, &req.file)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::NotFound(format!("failed to read '{}': {e}", req.file)))?;
    batch::check_file_size(&bytes)?;

    let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let rows = if is_json { batch::parse_json(&bytes)? } else { batch::parse_csv(&bytes)? };

    let conn = state.db.get_connection()?;
    let result = batch::ingest(&conn, rows, req.allow_updates, req.skip_duplicates).await?;
    Ok(Json(result))
}
