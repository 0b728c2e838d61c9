use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::token::verify;
use crate::errors::ApiError;
use crate::state::AppState;

/// Requires a valid, unexpired bearer token signed with the admin role.
/// Missing/malformed token → 401; a valid but non-admin token → 403 (§4.11).
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    let claims = verify(&state.config.auth_secret, token).ok_or(ApiError::Unauthorized)?;
    if claims.role != "admin" {
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}
