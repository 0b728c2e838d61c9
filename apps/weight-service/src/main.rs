use scalehouse_weight_service::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    scalehouse_telemetry::init_tracing("weight-service");

    let config = Config::from_env();
    let bind_addr = config.bind_addr.clone();
    tokio::fs::create_dir_all(&config.ingest_dir).await.ok();

    let app = scalehouse_weight_service::build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("weight-service listening on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
