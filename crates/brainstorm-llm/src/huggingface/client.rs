// Hugging Face hosted inference client

use crate::config::HuggingFaceConfig;
use crate::error::{ProviderError, Result};
use crate::http::build_http_client;
use crate::traits::ProviderClient;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models/gpt2";
pub const DEFAULT_LABEL: &str = "Hugging Face";
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;

pub struct HuggingFaceClient {
    http_client: reqwest::Client,
    endpoint: String,
    label: String,
    max_new_tokens: u32,
    timeout: Duration,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = build_http_client(&config.api_key, timeout)?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint,
            label: config.label,
            max_new_tokens: config.max_new_tokens,
            timeout,
        })
    }

    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "inputs": prompt,
            "parameters": { "max_new_tokens": self.max_new_tokens },
        })
    }

    /// Pull `generated_text` out of the text-generation response.
    ///
    /// The endpoint answers with `[{"generated_text": ...}]` on success and
    /// may answer `{"error": ...}` with a 2xx while the model is loading.
    fn extract_text(raw: Value) -> Result<String> {
        if let Some(message) = raw.get("error").and_then(Value::as_str) {
            return Err(ProviderError::Api(message.to_string()));
        }

        let first = match &raw {
            Value::Array(items) => items
                .first()
                .ok_or_else(|| ProviderError::EmptyResponse("empty response array".to_string()))?,
            Value::Object(_) => &raw,
            other => {
                return Err(ProviderError::Decode(format!(
                    "unexpected response shape: {}",
                    other
                )))
            }
        };

        match first.get("generated_text").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(ProviderError::EmptyResponse(
                "no generated_text in response".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ProviderClient for HuggingFaceClient {
    fn label(&self) -> &str {
        &self.label
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .http_client
            .post(&self.endpoint)
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
        let raw: Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Self::extract_text(raw)
    }
}
