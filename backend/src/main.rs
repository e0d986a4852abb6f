//! AgroSense - crop recommendation server
//!
//! Soil and weather input, AI crop recommendations, a results dashboard and
//! report export for a single browser session.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agrosense_server::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrosense_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgroSense server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        "Recommendation model: {} (temperature {})",
        config.gemini.model,
        config.gemini.temperature
    );
    if config.gemini.api_key.is_none() && std::env::var(agrosense_server::config::API_KEY_ENV).is_err() {
        tracing::warn!("No API key configured; analyses will fail until API_KEY is set");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
