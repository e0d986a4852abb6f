//! WebAssembly module for the AgroSense crop advisor
//!
//! Provides client-side computation for:
//! - Weather simulation for the input view
//! - Soil form validation
//! - Prompt preview
//! - Report export, chart data and yield badges for the dashboard
//!
//! Values cross the boundary as JSON strings in the camelCase wire format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::prompt::build_prompt;
use shared::report::{render_report, DEFAULT_LINES_PER_PAGE};
use validator::Validate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgroSense WASM module loaded"));
}

fn to_js_error(context: &str, message: String) -> JsValue {
    let text = format!("{}: {}", context, message);
    web_sys::console::error_1(&JsValue::from_str(&text));
    JsValue::from_str(&text)
}

/// Generate a simulated weather sample
#[wasm_bindgen]
pub fn simulate_weather() -> Result<String, JsValue> {
    serde_json::to_string(&shared::simulation::simulate())
        .map_err(|e| to_js_error("Weather simulation", e.to_string()))
}

/// Validate the soil form. Returns a JSON array of field errors; empty when valid.
#[wasm_bindgen]
pub fn validate_soil_input(form_json: &str) -> Result<String, JsValue> {
    soil_field_errors(form_json).map_err(|e| to_js_error("Invalid soil form JSON", e))
}

/// Check a pH value against the form range
#[wasm_bindgen]
pub fn is_ph_in_range(ph: f64) -> bool {
    is_valid_ph(ph)
}

/// Render the prompt that would be sent for a soil/weather pair
#[wasm_bindgen]
pub fn preview_prompt(soil_json: &str, weather_json: &str) -> Result<String, JsValue> {
    prompt_for(soil_json, weather_json).map_err(|e| to_js_error("Prompt preview", e))
}

/// Build the downloadable report for an analysis result
///
/// Returns `{"fileName": ..., "text": ...}`.
#[wasm_bindgen]
pub fn export_report(result_json: &str) -> Result<String, JsValue> {
    let now = DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default();
    report_for(result_json, now).map_err(|e| to_js_error("Report export", e))
}

/// Nutrient bar chart data for a soil sample
#[wasm_bindgen]
pub fn nutrient_chart_data(soil_json: &str) -> Result<String, JsValue> {
    chart_for(soil_json).map_err(|e| to_js_error("Chart data", e))
}

/// Canonical soil type name for free-form input ("loamy " → "Loamy")
#[wasm_bindgen]
pub fn normalize_soil_type(input: &str) -> Result<String, JsValue> {
    canonical_soil_type(input).map_err(|e| to_js_error("Soil type", e))
}

/// Badge level for a yield label: 1 (Low), 2 (Medium) or 3 (High)
#[wasm_bindgen]
pub fn yield_badge_level(label: &str) -> Result<u8, JsValue> {
    badge_level(label).map_err(|e| to_js_error("Yield", e))
}

/// Width (percent) of a suitability score bar
#[wasm_bindgen]
pub fn score_bar_width(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

fn soil_field_errors(form_json: &str) -> Result<String, String> {
    let form: SoilInputForm = serde_json::from_str(form_json).map_err(|e| e.to_string())?;
    let errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => field_errors(&e),
    };
    serde_json::to_string(&errors).map_err(|e| e.to_string())
}

fn prompt_for(soil_json: &str, weather_json: &str) -> Result<String, String> {
    let soil: SoilSample = serde_json::from_str(soil_json).map_err(|e| e.to_string())?;
    let weather: WeatherSample = serde_json::from_str(weather_json).map_err(|e| e.to_string())?;
    Ok(build_prompt(&soil, &weather))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDownload {
    file_name: String,
    text: String,
}

fn report_for(result_json: &str, generated_at: DateTime<Utc>) -> Result<String, String> {
    let result: AnalysisResult = serde_json::from_str(result_json).map_err(|e| e.to_string())?;
    if result.recommendations.is_empty() {
        return Err("analysis result has no recommendations".to_string());
    }
    let report = render_report(&result, generated_at, DEFAULT_LINES_PER_PAGE);
    serde_json::to_string(&ReportDownload {
        text: report.to_text(),
        file_name: report.file_name,
    })
    .map_err(|e| e.to_string())
}

fn canonical_soil_type(input: &str) -> Result<String, String> {
    input
        .parse::<SoilType>()
        .map(|t| t.as_str().to_string())
        .map_err(|e| e.to_string())
}

fn badge_level(label: &str) -> Result<u8, String> {
    match label.parse::<ExpectedYield>().map_err(|e| e.to_string())? {
        ExpectedYield::Low => Ok(1),
        ExpectedYield::Medium => Ok(2),
        ExpectedYield::High => Ok(3),
    }
}

fn chart_for(soil_json: &str) -> Result<String, String> {
    let soil: SoilSample = serde_json::from_str(soil_json).map_err(|e| e.to_string())?;
    serde_json::to_string(&nutrient_chart(&soil)).map_err(|e| e.to_string())
}
