//! Crop recommendation models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::ModelError;

/// One crop suggestion returned by the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop: String,
    /// Percentage score, nominally 0-100
    pub suitability_score: f64,
    pub fertilizer_advice: String,
    pub expected_yield: ExpectedYield,
    /// Profit narrative, e.g. "High profitability due to market demand"
    pub profit_estimator: String,
    /// Suggested next crop for rotation
    pub rotation_advice: String,
}

/// Expected yield classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpectedYield {
    Low,
    Medium,
    High,
}

impl ExpectedYield {
    pub const ALL: [ExpectedYield; 3] = [
        ExpectedYield::Low,
        ExpectedYield::Medium,
        ExpectedYield::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedYield::Low => "Low",
            ExpectedYield::Medium => "Medium",
            ExpectedYield::High => "High",
        }
    }
}

impl std::fmt::Display for ExpectedYield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpectedYield {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ExpectedYield::Low),
            "Medium" => Ok(ExpectedYield::Medium),
            "High" => Ok(ExpectedYield::High),
            other => Err(ModelError::UnknownYield(other.to_string())),
        }
    }
}

/// Recommendations plus the model's short analysis summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSet {
    pub recommendations: Vec<CropRecommendation>,
    pub summary: String,
}

impl RecommendationSet {
    /// Highest ranked recommendation (first as returned)
    pub fn top(&self) -> Option<&CropRecommendation> {
        self.recommendations.first()
    }
}
