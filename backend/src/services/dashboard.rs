//! Dashboard view model

use serde::Serialize;
use shared::{nutrient_chart, AnalysisResult, NutrientBar};

/// Everything the dashboard renders for one result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub result: AnalysisResult,
    pub nutrients: Vec<NutrientBar>,
    pub top_pick: Option<TopPick>,
}

/// Profit and rotation insight for the best ranked crop
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPick {
    pub crop: String,
    pub suitability_score: f64,
    pub profit_estimator: String,
    pub rotation_advice: String,
}

pub fn build_dashboard(result: AnalysisResult) -> DashboardView {
    let top_pick = result.top_recommendation().map(|rec| TopPick {
        crop: rec.crop.clone(),
        suitability_score: rec.suitability_score,
        profit_estimator: rec.profit_estimator.clone(),
        rotation_advice: rec.rotation_advice.clone(),
    });

    DashboardView {
        nutrients: nutrient_chart(&result.soil_data),
        top_pick,
        result,
    }
}
