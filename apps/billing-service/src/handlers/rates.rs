use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use scalehouse_billing_core::Rate;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::models::RateRow;
use crate::repo::rate_repo;
use crate::state::AppState;

/// Parses the `Product,Rate,Scope` spreadsheet contract (§4.6, §9): CSV is
/// used in place of a fabricated `xlsx` dependency (see DESIGN.md). A
/// malformed row aborts the whole upload before anything is deleted — the
/// full set is buffered and validated in memory first.
fn parse_rate_sheet(body: &str) -> Result<Vec<Rate>, ApiError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(body.as_bytes());
    let mut rates = Vec::new();

    for (line_no, result) in reader.deserialize::<RateRow>().enumerate() {
        let row = result.map_err(|e| ApiError::Validation(format!("row {}: {e}", line_no + 1)))?;
        if row.product.trim().is_empty() {
            return Err(ApiError::Validation(format!("row {}: product must not be empty", line_no + 1)));
        }
        rates.push(Rate { product_id: row.product, rate: row.rate, scope: row.scope });
    }

    Ok(rates)
}

pub async fn upload_rates(State(state): State<AppState>, body: String) -> Result<Json<serde_json::Value>, ApiError> {
    let rates = parse_rate_sheet(&body)?;
    let conn = state.db.get_connection()?;
    rate_repo::replace_all(&conn, &rates).await?;
    Ok(Json(json!({ "message": format!("{} rate(s) replaced", rates.len()) })))
}

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    pub format: Option<String>,
}

pub async fn list_rates(State(state): State<AppState>, Query(params): Query<RatesQuery>) -> Result<Response, ApiError> {
    let conn = state.db.get_connection()?;
    let rates = rate_repo::list_all(&conn).await?;

    match params.format.as_deref() {
        Some("csv") | Some("excel") => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for rate in &rates {
                writer
                    .serialize(RateRow { product: rate.product_id.clone(), rate: rate.rate, scope: rate.scope.clone() })
                    .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
            }
            let csv_bytes = writer.into_inner().map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
            Ok(([("content-type", "text/csv")], csv_bytes).into_response())
        }
        _ => Ok(Json(rates).into_response()),
    }
}
