//! AgroSense - crop recommendation server
//!
//! Serves a single browser session: soil and weather input, AI crop
//! recommendations, a results dashboard and report export.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{credentials, GeminiClient, TransportError};
use services::{RecommendationService, SessionContext};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: SessionContext,
    pub recommendations: RecommendationService,
}

impl AppState {
    pub fn new(config: Config, recommendations: RecommendationService) -> Self {
        Self {
            config: Arc::new(config),
            session: SessionContext::new(),
            recommendations,
        }
    }

    /// State wired to the Gemini API as configured
    pub fn from_config(config: Config) -> Result<Self, TransportError> {
        let client = GeminiClient::from_config(&config.gemini)?;
        let recommendations = RecommendationService::new(
            Arc::new(client),
            credentials::from_config(&config.gemini),
        )
        .with_temperature(config.gemini.temperature);

        Ok(Self::new(config, recommendations))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
