use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::AppState;

/// Liveness plus a round-trip `SELECT 1` against the database (§6).
pub async fn get_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let conn = state.db.get_connection()?;
    conn.query("SELECT 1", ())
        .await
        .map_err(scalehouse_db::DbError::from_libsql)?;

    Ok(Json(json!({ "status": "ok", "database": "connected" })))
}
