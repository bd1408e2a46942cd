// OpenAI-compatible chat completions client (Groq and friends)

use crate::config::ChatCompletionsConfig;
use crate::error::{ProviderError, Result};
use crate::http::build_http_client;
use crate::traits::ProviderClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_LABEL: &str = "Groq";
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Chat completions client (HTTP direct, no SDK)
pub struct ChatCompletionsClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    label: String,
    max_tokens: u32,
    timeout: Duration,
}

impl ChatCompletionsClient {
    pub fn new(config: ChatCompletionsConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = build_http_client(&config.api_key, timeout)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            label: config.label,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    /// Build chat completion request payload
    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.max_tokens,
        })
    }
}

#[async_trait]
impl ProviderClient for ChatCompletionsClient {
    fn label(&self) -> &str {
        &self.label
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, self.timeout))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_transport(e, self.timeout))?;
        let raw: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        let choice = raw
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::EmptyResponse("no choices in response".to_string()))?;

        match choice.message.and_then(|m| m.content) {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(ProviderError::EmptyResponse(
                "no content in first choice".to_string(),
            )),
        }
    }
}

// ============================================================================
// RESPONSE TYPES (only the fields we read)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
