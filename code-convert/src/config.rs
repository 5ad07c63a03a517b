use crate::error::Error;
use std::time::Duration;

/// Environment variable holding the oracle API key.
pub const API_KEY_ENV: &str = "TOGETHER_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

/// Connection settings for the translation oracle.
///
/// Built once at startup and read-only afterwards; the API key is the only
/// secret the service holds.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Defensive deadline on the oracle call itself
    pub request_timeout: Duration,
}

impl OracleConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 3000,
            temperature: 0.1,
            top_p: 0.9,
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Read the API key from the environment.
    pub fn from_env() -> Result<Self, Error> {
        std::env::var(API_KEY_ENV)
            .map(Self::new)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_ENV)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
