//! The translation oracle: an OpenAI-compatible chat-completions endpoint
//! treated as an opaque request/response function.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{config::OracleConfig, error::Error};

/// Request/response contract for the external translation service.
///
/// Tests substitute a deterministic stub so the suite stays offline.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Send one instruction to the oracle and return its raw reply.
    async fn translate(&self, system: &str, prompt: &str) -> Result<String, Error>;
}

/// Oracle backed by a hosted OpenAI-compatible API (Together by default).
pub struct TogetherOracle {
    client: reqwest::Client,
    config: OracleConfig,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl TogetherOracle {
    pub fn new(config: OracleConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Oracle(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Oracle for TogetherOracle {
    async fn translate(&self, system: &str, prompt: &str) -> Result<String, Error> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
        });

        debug!("Oracle request - model: {}", self.config.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Oracle(format!("Request error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Oracle(format!("API error: {} - {}", status, body)));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| Error::Oracle(format!("Malformed response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Oracle("No response generated".to_string()))
    }
}
