use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_token: Option<String>,
    pub bind_addr: String,
    /// Base URL of the billing-service this process provisions providers on (C12).
    pub billing_service_base_url: String,
    pub billing_service_timeout: Duration,
    pub admin_username: String,
    pub admin_password: String,
    /// Secret used to HMAC-sign the opaque bearer token minted by `/auth/login`.
    pub auth_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT").unwrap_or_else(|_| "8083".to_string());
        let timeout_secs: u64 = env::var("BILLING_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Config {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "registration.db".to_string()),
            database_token: env::var("DATABASE_AUTH_TOKEN").ok(),
            bind_addr: format!("0.0.0.0:{port}"),
            billing_service_base_url: env::var("BILLING_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            billing_service_timeout: Duration::from_secs(timeout_secs),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin@example.com".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            auth_secret: env::var("AUTH_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string()),
        }
    }
}
