pub mod auth;
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

use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::client::billing_client::BillingClient;
use crate::config::Config;
use crate::state::AppState;

/// Connects to the database, builds the billing client, and wires the axum
/// [`axum::Router`], shared by `main.rs` and integration tests.
pub async fn build_app(config: Config) -> anyhow::Result<axum::Router> {
    let db = TursoClient::connect(&config.database_url, config.database_token.clone(), schema::SCHEMA).await?;
    let billing_client =
        BillingClient::new(config.billing_service_base_url.clone(), config.billing_service_timeout);

    let state = AppState { db: Arc::new(db), billing_client: Arc::new(billing_client), config: Arc::new(config) };
    Ok(routes::build_router(state))
}
