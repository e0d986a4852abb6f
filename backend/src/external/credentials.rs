//! Credential lookup for the recommendation service
//!
//! Credentials are resolved on every request, so exporting `API_KEY` into a
//! running process environment takes effect without a restart.

use std::sync::Arc;

use crate::config::{GeminiConfig, API_KEY_ENV};

/// Source of the API key
pub trait CredentialSource: Send + Sync {
    /// Current key, or `None` when absent or blank
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable at call time
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|k| !k.trim().is_empty())
    }
}

/// Fixed key, typically from configuration
#[derive(Debug, Clone)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|k| !k.trim().is_empty())
    }
}

/// Configured key when present, otherwise the `API_KEY` environment variable
pub fn from_config(config: &GeminiConfig) -> Arc<dyn CredentialSource> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Arc::new(StaticCredential::new(key)),
        _ => Arc::new(EnvCredential::default()),
    }
}
