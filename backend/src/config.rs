//! Configuration management for the AgroSense server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides (`AGRO__SECTION__KEY`)

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable consulted for the recommendation service credential
/// when no key is configured under `gemini.api_key`.
pub const API_KEY_ENV: &str = "API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Generative model configuration
    pub gemini: GeminiConfig,

    /// Report export configuration
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key; when absent the key is read from `API_KEY` on every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name, e.g. gemini-2.5-flash
    pub model: String,

    /// Base URL of the generative language API
    pub base_url: String,

    /// Sampling temperature; kept low for analytical output
    pub temperature: f32,

    /// HTTP timeout for a single generation request, in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Lines per page of the text report
    pub lines_per_page: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRO_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.temperature", 0.4)?
            .set_default("gemini.timeout_secs", 60)?
            .set_default("report.lines_per_page", shared::report::DEFAULT_LINES_PER_PAGE as i64)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRO__ prefix)
            .add_source(
                Environment::with_prefix("AGRO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: 0.4,
            timeout_secs: 60,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            lines_per_page: shared::report::DEFAULT_LINES_PER_PAGE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
