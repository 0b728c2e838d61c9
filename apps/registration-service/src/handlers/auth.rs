use axum::extract::State;
use axum::Json;

use crate::auth::token::issue;
use crate::errors::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Fixed-credential admin login (§6 [AMBIENT]). Real JWT issuance is out of
/// scope (spec.md §1); this exists only to give `auth_guard` a bearer token
/// to check.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    if req.username != state.config.admin_username || req.password != state.config.admin_password {
        return Err(ApiError::Unauthorized);
    }

    let access_token = issue(&state.config.auth_secret, &req.username, "admin");
    Ok(Json(LoginResponse { access_token, token_type: "bearer".to_string() }))
}
