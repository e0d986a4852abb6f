//! Crop recommendation service
//!
//! Turns a soil and weather sample into one schema-constrained generation
//! request and maps the reply onto the domain model. Every failure comes
//! back as an [`OrchestrationError`]; nothing is retried or cached.

use serde::Deserialize;
use serde_json::json;
use shared::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use shared::{CropRecommendation, ExpectedYield, RecommendationSet, SoilSample, WeatherSample};
use std::sync::Arc;

use crate::error::OrchestrationError;
use crate::external::{CredentialSource, GenerationRequest, TextGenerator};

/// Default sampling temperature for recommendation requests
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Recommendation orchestrator
#[derive(Clone)]
pub struct RecommendationService {
    generator: Arc<dyn TextGenerator>,
    credentials: Arc<dyn CredentialSource>,
    temperature: f32,
}

/// Response body expected from the model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationPayload {
    recommendations: Vec<CropRecommendation>,
    analysis_summary: String,
}

impl RecommendationService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        credentials: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            generator,
            credentials,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Request ranked crop recommendations for a soil/weather pair
    pub async fn request_recommendations(
        &self,
        soil: &SoilSample,
        weather: &WeatherSample,
    ) -> Result<RecommendationSet, OrchestrationError> {
        let api_key = self.credentials.api_key().ok_or_else(|| {
            OrchestrationError::Configuration("API_KEY is missing from environment variables".into())
        })?;

        let request = GenerationRequest {
            api_key,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(soil, weather),
            response_schema: response_schema(),
            temperature: self.temperature,
        };

        tracing::info!(
            location = %soil.location,
            soil_type = %soil.soil_type,
            "Requesting crop recommendations"
        );

        let text = self
            .generator
            .generate(request)
            .await
            .map_err(|e| {
                tracing::error!("Recommendation request failed: {}", e);
                OrchestrationError::Service(e)
            })?
            .filter(|t| !t.trim().is_empty())
            .ok_or(OrchestrationError::EmptyResponse)?;

        let set = parse_response(&text)?;

        if let Some(top) = set.top() {
            tracing::info!(
                count = set.recommendations.len(),
                top = %top.crop,
                score = top.suitability_score,
                "Received crop recommendations"
            );
        }

        Ok(set)
    }
}

/// Structured output schema sent with every request
pub fn response_schema() -> serde_json::Value {
    let yields: Vec<&str> = ExpectedYield::ALL.iter().map(|y| y.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "crop": { "type": "STRING", "description": "Name of the crop" },
                        "suitabilityScore": { "type": "NUMBER", "description": "Percentage score 0-100" },
                        "fertilizerAdvice": { "type": "STRING", "description": "Specific fertilizer recommendations" },
                        "expectedYield": { "type": "STRING", "enum": yields },
                        "profitEstimator": {
                            "type": "STRING",
                            "description": "Estimated profit text (e.g., 'High profitability due to market demand')"
                        },
                        "rotationAdvice": { "type": "STRING", "description": "Suggested next crop for rotation" }
                    },
                    "required": [
                        "crop",
                        "suitabilityScore",
                        "fertilizerAdvice",
                        "expectedYield",
                        "profitEstimator",
                        "rotationAdvice"
                    ]
                }
            },
            "analysisSummary": {
                "type": "STRING",
                "description": "A brief 2 sentence summary of the soil condition."
            }
        },
        "required": ["recommendations", "analysisSummary"]
    })
}

/// Parse and check the model's reply
///
/// Out-of-range scores and empty recommendation lists are rejected rather
/// than clamped or padded.
pub fn parse_response(text: &str) -> Result<RecommendationSet, OrchestrationError> {
    let payload: RecommendationPayload = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Recommendation payload did not match schema: {}", e);
        OrchestrationError::MalformedResponse(e.to_string())
    })?;

    if payload.recommendations.is_empty() {
        return Err(OrchestrationError::MalformedResponse(
            "recommendations array is empty".into(),
        ));
    }

    for (i, rec) in payload.recommendations.iter().enumerate() {
        let score = rec.suitability_score;
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(OrchestrationError::MalformedResponse(format!(
                "recommendation {} ({}) has suitabilityScore {} outside 0-100",
                i, rec.crop, score
            )));
        }
    }

    Ok(RecommendationSet {
        recommendations: payload.recommendations,
        summary: payload.analysis_summary,
    })
}
