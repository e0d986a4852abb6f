//! Analysis submission flow
//!
//! Validates the input form, resolves the weather sample, runs the
//! recommendation request and records the outcome in the session.

use chrono::Utc;
use shared::{AnalysisRequest, AnalysisResult};

use crate::error::{AppError, AppResult, RECOMMENDATION_FAILED_MESSAGE};
use crate::services::recommendation::RecommendationService;
use crate::services::session::SessionContext;

pub const MISSING_WEATHER_MESSAGE: &str = "Please fetch weather data first.";

/// Drives one analysis from form submission to stored result
#[derive(Clone)]
pub struct AnalysisService {
    session: SessionContext,
    recommendations: RecommendationService,
}

impl AnalysisService {
    pub fn new(session: SessionContext, recommendations: RecommendationService) -> Self {
        Self {
            session,
            recommendations,
        }
    }

    /// Submit an analysis request
    ///
    /// The recommendation call runs on its own task, so it finishes and
    /// updates the session even if the client goes away.
    pub async fn submit(&self, request: AnalysisRequest) -> AppResult<AnalysisResult> {
        let soil = request.soil.into_sample()?;

        let supplied = request.weather.is_some();
        let weather = match request.weather {
            Some(weather) => weather,
            None => self
                .session
                .weather_draft()
                .await
                .ok_or_else(|| AppError::Validation {
                    field: "weather".to_string(),
                    message: MISSING_WEATHER_MESSAGE.to_string(),
                })?,
        };

        self.session.begin().await?;
        // The draft only changes once this submission owns the session
        if supplied {
            self.session.set_weather_draft(weather.clone()).await;
        }

        let session = self.session.clone();
        let recommendations = self.recommendations.clone();
        let task = tokio::spawn(async move {
            match recommendations.request_recommendations(&soil, &weather).await {
                Ok(set) => {
                    let result = AnalysisResult::new(soil, weather, set, Utc::now());
                    tracing::info!(result_id = %result.id, "Analysis complete");
                    session.complete(result.clone()).await;
                    Ok(result)
                }
                Err(e) => {
                    tracing::error!(kind = e.kind(), "Analysis failed: {:?}", e);
                    session.fail(RECOMMENDATION_FAILED_MESSAGE).await;
                    Err(AppError::from(e))
                }
            }
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.session.fail(RECOMMENDATION_FAILED_MESSAGE).await;
                Err(AppError::Internal(format!("Analysis task aborted: {}", e)))
            }
        }
    }
}
