pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod schema;
pub mod service;
pub mod state;
pub mod routes;

use std::sync::Arc;

use scalehouse_db::TursoClient;

use crate::config::Config;
use crate::state::AppState;

/// Connects to the database and builds the axum [`axum::Router`], shared
/// by `main.rs` and integration tests.
pub async fn build_app(config: Config) -> anyhow::Result<axum::Router> {
    let db = TursoClient::connect(&config.database_url, config.database_token.clone(), schema::SCHEMA).await?;
    let state = AppState { db: Arc::new(db), config: Arc::new(config) };
    Ok(routes::build_router(state))
}
