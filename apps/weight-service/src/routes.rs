use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{containers, health, weight};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/weight", post(weight::post_weigh).get(weight::get_weight))
        .route("/batch-weight", post(containers::post_batch_weight))
        .route("/containers", post(containers::register_container))
        .route("/item/{id}", get(weight::get_item))
        .route("/session/{id}", get(weight::get_session))
        .route("/unknown", get(weight::get_unknown))
        .route("/health", get(health::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
