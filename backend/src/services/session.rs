//! Session context
//!
//! Holds the state of the single browser session served by this process:
//! the analysis phase, at most one analysis result and the current weather
//! draft. It is created at startup, passed around through [`crate::AppState`]
//! and cleared with [`SessionContext::end`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{AnalysisResult, WeatherSample};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Where the input → analyze → dashboard flow currently is
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AnalysisPhase {
    Idle,
    Pending { started_at: DateTime<Utc> },
    Ready { result_id: Uuid },
    Failed { message: String },
}

impl AnalysisPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisPhase::Pending { .. })
    }
}

#[derive(Debug)]
struct SessionState {
    phase: AnalysisPhase,
    result: Option<AnalysisResult>,
    weather_draft: Option<WeatherSample>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: AnalysisPhase::Idle,
            result: None,
            weather_draft: None,
        }
    }
}

/// Shared handle to the session state
#[derive(Clone, Default)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored result
    pub async fn set(&self, result: Option<AnalysisResult>) {
        self.state.write().await.result = result;
    }

    /// Most recent analysis result, if any
    pub async fn get(&self) -> Option<AnalysisResult> {
        self.state.read().await.result.clone()
    }

    pub async fn phase(&self) -> AnalysisPhase {
        self.state.read().await.phase.clone()
    }

    /// Enter `Pending`. Only one analysis may be in flight at a time.
    pub async fn begin(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.phase.is_pending() {
            return Err(AppError::AnalysisInProgress);
        }
        state.phase = AnalysisPhase::Pending {
            started_at: Utc::now(),
        };
        Ok(())
    }

    /// Store a fresh result, discarding the previous one
    pub async fn complete(&self, result: AnalysisResult) {
        let mut state = self.state.write().await;
        state.phase = AnalysisPhase::Ready {
            result_id: result.id,
        };
        state.result = Some(result);
    }

    /// Record a failure. A previous result stays readable.
    pub async fn fail(&self, message: impl Into<String>) {
        self.state.write().await.phase = AnalysisPhase::Failed {
            message: message.into(),
        };
    }

    pub async fn weather_draft(&self) -> Option<WeatherSample> {
        self.state.read().await.weather_draft.clone()
    }

    pub async fn set_weather_draft(&self, weather: WeatherSample) {
        self.state.write().await.weather_draft = Some(weather);
    }

    /// Tear down the session: result, weather draft and phase
    ///
    /// Refused while an analysis is pending, so an in-flight request can
    /// never write its result into a cleared session.
    pub async fn end(&self) -> AppResult<()> {
        let mut state = self.state.write().await;
        if state.phase.is_pending() {
            return Err(AppError::AnalysisInProgress);
        }
        *state = SessionState::default();
        Ok(())
    }
}
