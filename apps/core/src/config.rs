//! Analysis configuration.
//!
//! Read once at startup from the process environment (optionally seeded from a
//! `.env` file). The presence of an API credential decides which sentiment
//! classifier the analyzer is built with.

use crate::error::AppError;
use std::env;
use std::time::Duration;
use url::Url;

// --- Constants ---
pub const DEFAULT_API_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_EMOTION_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_API_KEY: &str = "HUGGINGFACE_API_KEY";
const ENV_API_URL: &str = "HUGGINGFACE_API_URL";
const ENV_SENTIMENT_MODEL: &str = "SENTIMENT_MODEL";
const ENV_EMOTION_MODEL: &str = "EMOTION_MODEL";
const ENV_TIMEOUT: &str = "CLASSIFIER_TIMEOUT_SECS";

/// Settings for the content-analysis engine.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Credential for the hosted inference API. `None` keeps analysis fully local.
    pub api_key: Option<String>,
    /// Base URL of the inference API; model paths are joined onto it.
    pub api_base_url: Url,
    /// Binary sentiment model identifier.
    pub sentiment_model: String,
    /// Emotion model identifier.
    pub emotion_model: String,
    /// Per-request timeout for the outbound classifier call.
    pub request_timeout: Duration,
}

impl AnalysisConfig {
    /// Offline configuration: no credential, so no network call is ever attempted.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default API URL is valid"),
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            emotion_model: DEFAULT_EMOTION_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads the configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        // A missing .env file is the normal case in production.
        let _ = dotenv::dotenv();

        let api_key = non_blank(ENV_API_KEY);

        let api_base_url = match non_blank(ENV_API_URL) {
            Some(raw) => Url::parse(&raw)?,
            None => Url::parse(DEFAULT_API_BASE_URL)?,
        };

        let request_timeout = match non_blank(ENV_TIMEOUT) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT, raw))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!("{} must be greater than zero", ENV_TIMEOUT)));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            api_base_url,
            sentiment_model: non_blank(ENV_SENTIMENT_MODEL)
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
            emotion_model: non_blank(ENV_EMOTION_MODEL)
                .unwrap_or_else(|| DEFAULT_EMOTION_MODEL.to_string()),
            request_timeout,
        })
    }

    /// Returns a copy of this configuration with the given credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::offline()
    }
}

/// Reads an environment variable, treating empty and whitespace-only values as unset.
fn non_blank(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
