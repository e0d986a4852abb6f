//! Analysis result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CropRecommendation, RecommendationSet, SoilSample, WeatherSample};

/// Outcome of one successful recommendation request
///
/// Always fully populated: the recommendation list is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub soil_data: SoilSample,
    pub weather_data: WeatherSample,
    /// Ranked as returned by the recommendation service
    pub recommendations: Vec<CropRecommendation>,
    pub analysis_summary: String,
    pub analysis_timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(
        soil_data: SoilSample,
        weather_data: WeatherSample,
        set: RecommendationSet,
        analysis_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            soil_data,
            weather_data,
            recommendations: set.recommendations,
            analysis_summary: set.summary,
            analysis_timestamp,
        }
    }

    pub fn top_recommendation(&self) -> Option<&CropRecommendation> {
        self.recommendations.first()
    }
}

/// Nutrient bar for the dashboard chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientBar {
    pub name: String,
    pub value: f64,
    pub max: f64,
}

/// Chart data for the N/P/K levels of a soil sample
pub fn nutrient_chart(soil: &SoilSample) -> Vec<NutrientBar> {
    [
        ("Nitrogen", soil.nitrogen, 200.0),
        ("Phosphorus", soil.phosphorus, 100.0),
        ("Potassium", soil.potassium, 300.0),
    ]
    .into_iter()
    .map(|(name, value, max)| NutrientBar {
        name: name.to_string(),
        value,
        max,
    })
    .collect()
}
