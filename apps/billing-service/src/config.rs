use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_token: Option<String>,
    pub bind_addr: String,
    /// Base URL of the weight-service this process pulls weighings from (C9).
    pub weight_service_base_url: String,
    pub weight_service_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "8082".to_string());
        let timeout_secs: u64 = env::var("WEIGHT_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Config {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "billing.db".to_string()),
            database_token: env::var("DATABASE_AUTH_TOKEN").ok(),
            bind_addr: format!("0.0.0.0:{port}"),
            weight_service_base_url: env::var("WEIGHT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            weight_service_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
