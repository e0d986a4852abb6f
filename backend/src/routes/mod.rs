//! Route definitions for the AgroSense server

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Input view
        .route("/input", get(handlers::get_input_form))
        .nest("/weather", weather_routes())
        .nest("/analysis", analysis_routes())
        // Dashboard view and export
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/report", get(handlers::download_report))
        .route("/report.csv", get(handlers::download_csv))
        // Session lifecycle
        .route("/session", delete(handlers::end_session))
        // Contact view
        .route("/contact", post(handlers::submit_contact))
}

/// Weather draft routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_weather))
        .route("/simulate", post(handlers::simulate_weather))
}

/// Analysis routes
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::submit_analysis))
        .route("/status", get(handlers::get_analysis_status))
}
