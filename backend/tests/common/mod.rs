//! Shared fixtures for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use agrosense_server::external::{
    CredentialSource, GenerationRequest, StaticCredential, TextGenerator, TransportError,
};
use agrosense_server::services::RecommendationService;
use shared::{SoilInputForm, SoilSample, SoilType, WeatherSample};

/// What the scripted generator answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Nothing,
    Status(u16),
}

/// In-memory text generator that records every request it receives
pub struct ScriptedGenerator {
    replies: Mutex<Vec<Reply>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    /// Answer every call with the same reply
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::sequence(vec![reply])
    }

    /// Answer calls in order; the last reply repeats
    pub fn sequence(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.remove(0)
            } else {
                replies[0].clone()
            }
        };

        match reply {
            Reply::Text(text) => Ok(Some(text)),
            Reply::Nothing => Ok(None),
            Reply::Status(status) => Err(TransportError::Status {
                status,
                body: "upstream error".to_string(),
            }),
        }
    }
}

/// Generator that holds every call until released, tracking overlap
pub struct GatedGenerator {
    reply: String,
    entered: Notify,
    release: Notify,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl GatedGenerator {
    pub fn new(reply: String) -> Arc<Self> {
        Arc::new(Self {
            reply,
            entered: Notify::new(),
            release: Notify::new(),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        })
    }

    /// Wait until a call is parked inside `generate`
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Let one parked call finish
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<Option<String>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        self.entered.notify_one();
        self.release.notified().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(Some(self.reply.clone()))
    }
}

pub fn service(generator: Arc<ScriptedGenerator>) -> RecommendationService {
    service_with_key(generator, StaticCredential::new("test-key"))
}

pub fn service_with_key(
    generator: Arc<ScriptedGenerator>,
    credentials: impl CredentialSource + 'static,
) -> RecommendationService {
    RecommendationService::new(generator, Arc::new(credentials))
}

pub fn test_valley_soil() -> SoilSample {
    SoilSample {
        ph: 6.5,
        nitrogen: 100.0,
        phosphorus: 40.0,
        potassium: 150.0,
        soil_type: SoilType::Loamy,
        location: "Test Valley".to_string(),
    }
}

pub fn test_valley_form() -> SoilInputForm {
    SoilInputForm {
        location: "Test Valley".to_string(),
        ..Default::default()
    }
}

pub fn cloudy_weather() -> WeatherSample {
    WeatherSample {
        temperature: 28.0,
        humidity: 65.0,
        rainfall: 20.0,
        description: "Cloudy".to_string(),
        is_simulated: true,
    }
}

/// A well-formed model reply listing `crops` in rank order
pub fn payload(crops: &[(&str, f64)]) -> String {
    let recommendations: Vec<serde_json::Value> = crops
        .iter()
        .map(|(crop, score)| {
            serde_json::json!({
                "crop": crop,
                "suitabilityScore": score,
                "fertilizerAdvice": format!("Balanced NPK for {}", crop),
                "expectedYield": "High",
                "profitEstimator": "High profitability due to market demand",
                "rotationAdvice": "Soybean"
            })
        })
        .collect();

    serde_json::json!({
        "recommendations": recommendations,
        "analysisSummary": "Loamy soil with neutral pH. Nutrient levels are adequate."
    })
    .to_string()
}

pub fn maize_payload() -> String {
    payload(&[("Maize", 82.0)])
}
