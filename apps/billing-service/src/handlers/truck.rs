use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::ApiError;
use crate::models::{TruckDto, UpdateTruckRequest, UpsertTruckRequest};
use crate::repo::truck_repo;
use crate::state::AppState;

const MAX_TRUCK_ID_LEN: usize = 10;

pub async fn create_truck(
    State(state): State<AppState>,
    Json(req): Json<UpsertTruckRequest>,
) -> Result<(StatusCode, Json<TruckDto>), ApiError> {
    if req.id.is_empty() || req.id.len() > MAX_TRUCK_ID_LEN {
        return Err(ApiError::Validation(format!(
            "truck id must be 1-{MAX_TRUCK_ID_LEN} characters"
        )));
    }

    let conn = state.db.get_connection()?;
    truck_repo::upsert(&conn, &req.id, req.provider_id)
        .await?
        .map(|truck| (StatusCode::CREATED, Json(truck)))
        .ok_or_else(|| ApiError::NotFound(format!("provider {} not found", req.provider_id)))
}

pub async fn update_truck(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTruckRequest>,
) -> Result<Json<TruckDto>, ApiError> {
    let conn = state.db.get_connection()?;
    truck_repo::upsert(&conn, &id, req.provider_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("provider {} not found", req.provider_id)))
}
