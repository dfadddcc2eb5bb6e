use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use stillcast::app;
use stillcast::config::settings::AppConfig;
use stillcast::infrastructure::fetch::Fetcher;
use stillcast::infrastructure::ffmpeg::backend::ProcessBackend;
use stillcast::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new();
    let fetcher = Fetcher::new(Duration::from_secs(config.download_timeout_secs))?;
    let transcoder = Arc::new(ProcessBackend::new(&config));
    let addr = format!("0.0.0.0:{}", config.server_port);

    let state = AppState::new(config, fetcher, transcoder);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
