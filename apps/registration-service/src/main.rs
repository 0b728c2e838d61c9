use scalehouse_registration_service::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    scalehouse_telemetry::init_tracing("registration-service");

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();

    let app = scalehouse_registration_service::build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("registration-service listening on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
