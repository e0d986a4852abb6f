//! External API integrations
//!
//! The recommendation service is reached through [`TextGenerator`] so the
//! orchestrator can be exercised against an in-memory generator.

use async_trait::async_trait;
use thiserror::Error;

pub mod credentials;
pub mod gemini;

pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use gemini::GeminiClient;

/// A single schema-constrained generation request
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Credential resolved by the caller
    pub api_key: String,
    pub system_instruction: String,
    pub prompt: String,
    /// JSON schema the response text must follow
    pub response_schema: serde_json::Value,
    pub temperature: f32,
}

/// Failures of the transport itself
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response envelope: {0}")]
    Decode(String),
}

/// Text generation capability with structured output
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit one request. `Ok(None)` means the call succeeded without text.
    async fn generate(&self, request: GenerationRequest) -> Result<Option<String>, TransportError>;
}
