//! Weather data models

use serde::{Deserialize, Serialize};

/// A weather snapshot used as model input
///
/// No real weather source exists, so every sample produced by the
/// application carries `is_simulated = true`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Rainfall prediction in mm
    pub rainfall: f64,
    /// Short condition descriptor, e.g. "Cloudy"
    pub description: String,
    pub is_simulated: bool,
}
