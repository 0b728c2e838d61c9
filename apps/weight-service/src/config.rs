use std::env;
use std::path::PathBuf;

/// Process configuration, read once at startup the way the teacher's
/// binaries read `DATABASE_URL`/`PORT` directly in `main.rs` — no external
/// config-framework dependency.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_token: Option<String>,
    pub bind_addr: String,
    /// Directory batch-upload file paths must resolve under (§4.2).
    pub ingest_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
        Config {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "weight.db".to_string()),
            database_token: env::var("DATABASE_AUTH_TOKEN").ok(),
            bind_addr: format!("0.0.0.0:{port}"),
            ingest_dir: env::var("INGEST_DIR").unwrap_or_else(|_| "./ingest".to_string()).into(),
        }
    }
}
