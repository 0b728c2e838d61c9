use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::BillResponse;
use crate::service::aggregator::compute_bill;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BillParams {
    pub from: String,
    pub to: String,
}

pub async fn get_bill(
    State(state): State<AppState>,
    Path(provider_id): Path<i64>,
    Query(params): Query<BillParams>,
) -> Result<Json<BillResponse>, ApiError> {
    let conn = state.db.get_connection()?;
    let bill = compute_bill(&conn, &state.weight_client, provider_id, &params.from, &params.to).await?;
    Ok(Json(bill))
}
