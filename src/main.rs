use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use audio_pipeline::app;
use audio_pipeline::common::telemetry;
use audio_pipeline::config::settings::AppConfig;
use audio_pipeline::infrastructure::storage::S3ObjectStore;
use audio_pipeline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::new().context("missing required environment variable")?;
    telemetry::init_tracing(&config.log_format);

    info!("Starting audio pipeline...");

    let port = config.server_port;
    let store = Arc::new(S3ObjectStore::new(&config));
    let state = AppState::from_config(config, store);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
