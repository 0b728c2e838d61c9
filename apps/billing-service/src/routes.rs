use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{bill, health, provider, rates, truck};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/provider", post(provider::create_provider))
        .route("/provider/{id}", put(provider::rename_provider))
        .route("/truck", post(truck::create_truck))
        .route("/truck/{id}", put(truck::update_truck))
        .route("/rates", post(rates::upload_rates).get(rates::list_rates))
        .route("/bill/{id}", get(bill::get_bill))
        .route("/health", get(health::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
