pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod window;

use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::client::weight_client::WeightServiceClient;
use crate::config::Config;
use crate::state::AppState;

/// Connects to the database, builds the weight-service client, and wires
/// the axum [`axum::Router`], shared by `main.rs` and integration tests.
pub async fn build_app(config: Config) -> anyhow::Result<axum::Router> {
    let db = TursoClient::connect(&config.database_url, config.database_token.clone(), schema::SCHEMA).await?;
    let weight_client =
        WeightServiceClient::new(config.weight_service_base_url.clone(), config.weight_service_timeout);

    let state = AppState { db: Arc::new(db), weight_client: Arc::new(weight_client), config: Arc::new(config) };
    Ok(routes::build_router(state))
}
