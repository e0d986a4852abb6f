//! HTTP handlers for the input view and analysis submission

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use shared::validation::{PH_MAX, PH_MIN};
use shared::{AnalysisRequest, AnalysisResult, SoilInputForm, SoilType, View, WeatherSample};

use crate::error::{AppError, AppResult};
use crate::services::{AnalysisPhase, AnalysisService, WeatherService};
use crate::AppState;

/// Everything the input view needs to render its form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFormResponse {
    pub defaults: SoilInputForm,
    pub soil_types: Vec<SoilType>,
    pub ph_min: f64,
    pub ph_max: f64,
    pub weather: Option<WeatherSample>,
    /// Submission is disabled until weather exists and nothing is pending
    pub can_submit: bool,
    pub phase: AnalysisPhase,
}

/// Input form descriptor
pub async fn get_input_form(State(state): State<AppState>) -> Json<InputFormResponse> {
    let weather = state.session.weather_draft().await;
    let phase = state.session.phase().await;

    Json(InputFormResponse {
        defaults: SoilInputForm::default(),
        soil_types: SoilType::ALL.to_vec(),
        ph_min: PH_MIN,
        ph_max: PH_MAX,
        can_submit: weather.is_some() && !phase.is_pending(),
        weather,
        phase,
    })
}

/// Simulate a new weather sample for the input view
pub async fn simulate_weather(State(state): State<AppState>) -> Json<WeatherSample> {
    let service = WeatherService::new(state.session);
    Json(service.refresh().await)
}

/// Current weather draft
pub async fn get_weather(State(state): State<AppState>) -> AppResult<Json<WeatherSample>> {
    let service = WeatherService::new(state.session);
    service
        .current()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Weather data".to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub result: AnalysisResult,
    /// View to navigate to next
    pub redirect: &'static str,
}

/// Submit soil parameters for analysis
pub async fn submit_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> AppResult<(StatusCode, Json<AnalysisResponse>)> {
    let service = AnalysisService::new(state.session, state.recommendations);
    let result = service.submit(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(AnalysisResponse {
            result,
            redirect: View::Dashboard.path(),
        }),
    ))
}

/// Current analysis phase
pub async fn get_analysis_status(State(state): State<AppState>) -> Json<AnalysisPhase> {
    Json(state.session.phase().await)
}

/// Discard the current result and weather draft
///
/// Answers 409 while an analysis is still running.
pub async fn end_session(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.session.end().await?;
    tracing::info!("Session cleared");
    Ok(StatusCode::NO_CONTENT)
}
