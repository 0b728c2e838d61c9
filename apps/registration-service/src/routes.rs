use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::guard::require_admin;
use crate::handlers::{auth, candidates, health};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/candidates/{id}/approve", post(candidates::approve_candidate))
        .route("/candidates/{id}/reject", post(candidates::reject_candidate))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/candidates", post(candidates::create_candidate).get(candidates::list_candidates))
        .route("/candidates/{id}", get(candidates::get_candidate))
        .merge(admin_routes)
        .route("/auth/login", post(auth::login))
        .route("/health", get(health::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
