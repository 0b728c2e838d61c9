use axum::extract::{Path, Query, State};
use axum::Json;
use scalehouse_weight_core::{parse_direction_filter, resolve_window, ItemKind};
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::models::{SessionDetailDto, TransactionDto, WeighRequest, WeighResponse};
use crate::service::{query, weighing};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub filter: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn post_weigh(
    State(state): State<AppState>,
    Json(req): Json<WeighRequest>,
) -> Result<Json<WeighResponse>, ApiError> {
    let conn = state.db.get_connection()?;
    let response = weighing::process_weigh(&conn, req).await?;
    Ok(Json(response))
}

pub async fn get_weight(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<TransactionDto>>, ApiError> {
    let window = resolve_window(params.from.as_deref(), params.to.as_deref())?;
    let directions = parse_direction_filter(params.filter.as_deref());
    let conn = state.db.get_connection()?;
    let rows = query::list_range(&conn, window, &directions, params.limit, params.offset).await?;
    Ok(Json(rows.into_iter().map(TransactionDto::from).collect()))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let window = resolve_window(params.from.as_deref(), params.to.as_deref())?;
    let conn = state.db.get_connection()?;
    let kind = query::classify(&conn, &id, window).await?;

    let body = match kind {
        ItemKind::Truck => {
            let rollup = query::rollup_truck(&conn, &id, window).await?;
            json!({
                "id": id,
                "kind": "truck",
                "session_ids": rollup.session_ids,
                "truck_tara_avg": rollup.truck_tara_avg,
            })
        }
        ItemKind::Container => {
            let rollup = query::rollup_container(&conn, &id, window).await?;
            json!({
                "id": id,
                "kind": "container",
                "tare_kg": rollup.tare_kg,
                "session_ids": rollup.session_ids,
            })
        }
    };

    Ok(Json(body))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionDetailDto>, ApiError> {
    let conn = state.db.get_connection()?;
    let rows = crate::repo::transaction_repo::get_by_session(&conn, &session_id).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(format!("session '{session_id}' not found")));
    }

    let is_complete = weighing::is_complete(&rows);
    let mut inbound = None;
    let mut out = None;
    for row in rows {
        match row.direction {
            scalehouse_weight_core::Direction::In => inbound = Some(TransactionDto::from(row)),
            scalehouse_weight_core::Direction::Out => out = Some(TransactionDto::from(row)),
            scalehouse_weight_core::Direction::None => inbound = Some(TransactionDto::from(row)),
        }
    }

    Ok(Json(SessionDetailDto { session_id, is_complete, inbound, out }))
}

pub async fn get_unknown(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let window = resolve_window(params.from.as_deref(), params.to.as_deref())?;
    let conn = state.db.get_connection()?;
    Ok(Json(query::unknown_containers(&conn, window).await?))
}
