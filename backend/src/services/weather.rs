//! Weather service for the input view
//!
//! Every refresh replaces the session's weather draft with a new simulated
//! sample; no history is kept.

use shared::simulation;
use shared::WeatherSample;

use crate::services::session::SessionContext;

#[derive(Clone)]
pub struct WeatherService {
    session: SessionContext,
}

impl WeatherService {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Generate a new sample and make it the current draft
    pub async fn refresh(&self) -> WeatherSample {
        let sample = simulation::simulate();
        tracing::debug!(
            temperature = sample.temperature,
            humidity = sample.humidity,
            rainfall = sample.rainfall,
            condition = %sample.description,
            "Simulated weather sample"
        );
        self.session.set_weather_draft(sample.clone()).await;
        sample
    }

    pub async fn current(&self) -> Option<WeatherSample> {
        self.session.weather_draft().await
    }
}
