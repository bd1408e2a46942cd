// Configuration layer for provider client creation
// Providers are declared in configuration and built through ClientFactory

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::ensemble::ProviderEnsemble;
use crate::traits::ProviderClient;
use crate::{huggingface, openai};

/// Type of provider adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    HuggingFace,
    ChatCompletions,
}

/// Configuration for a Hugging Face hosted inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default = "default_hf_label")]
    pub label: String,
    #[serde(default = "default_hf_endpoint")]
    pub endpoint: String,
    /// Filled from the environment at startup, never from TOML
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
}

impl HuggingFaceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            label: default_hf_label(),
            endpoint: default_hf_endpoint(),
            api_key: api_key.into(),
            max_new_tokens: default_max_new_tokens(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Configuration for an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionsConfig {
    #[serde(default = "default_chat_label")]
    pub label: String,
    /// Base URL, e.g. "https://api.groq.com/openai/v1"
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Generation-length bound sent as `max_tokens`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ChatCompletionsConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            label: default_chat_label(),
            base_url: default_chat_base_url(),
            model: model.into(),
            api_key: api_key.into(),
            max_tokens: default_max_tokens(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderDetails {
    HuggingFace(HuggingFaceConfig),
    ChatCompletions(ChatCompletionsConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Environment variable holding the credential
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    pub fn huggingface(api_key: impl Into<String>) -> Self {
        Self {
            api_key_env: None,
            details: ProviderDetails::HuggingFace(HuggingFaceConfig::new(api_key)),
        }
    }

    pub fn chat_completions(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key_env: None,
            details: ProviderDetails::ChatCompletions(ChatCompletionsConfig::new(api_key, model)),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        match &mut self.details {
            ProviderDetails::HuggingFace(c) => c.label = label.into(),
            ProviderDetails::ChatCompletions(c) => c.label = label.into(),
        }
        self
    }

    /// Point the provider at a different host (mock servers, proxies)
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        match &mut self.details {
            ProviderDetails::HuggingFace(c) => c.endpoint = url.into(),
            ProviderDetails::ChatCompletions(c) => c.base_url = url.into(),
        }
        self
    }

    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::HuggingFace(_) => ProviderType::HuggingFace,
            ProviderDetails::ChatCompletions(_) => ProviderType::ChatCompletions,
        }
    }

    pub fn label(&self) -> &str {
        match &self.details {
            ProviderDetails::HuggingFace(c) => &c.label,
            ProviderDetails::ChatCompletions(c) => &c.label,
        }
    }

    pub fn api_key(&self) -> &str {
        match &self.details {
            ProviderDetails::HuggingFace(c) => &c.api_key,
            ProviderDetails::ChatCompletions(c) => &c.api_key,
        }
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        match &mut self.details {
            ProviderDetails::HuggingFace(c) => c.api_key = api_key.into(),
            ProviderDetails::ChatCompletions(c) => c.api_key = api_key.into(),
        }
    }

    /// Environment variable to read the credential from
    pub fn api_key_env(&self) -> &str {
        match (&self.api_key_env, &self.details) {
            (Some(name), _) => name,
            (None, ProviderDetails::HuggingFace(_)) => "HF_API_KEY",
            (None, ProviderDetails::ChatCompletions(_)) => "GROQ_API_KEY",
        }
    }
}

fn default_hf_label() -> String {
    huggingface::DEFAULT_LABEL.to_string()
}

fn default_hf_endpoint() -> String {
    huggingface::DEFAULT_ENDPOINT.to_string()
}

fn default_max_new_tokens() -> u32 {
    huggingface::DEFAULT_MAX_NEW_TOKENS
}

fn default_chat_label() -> String {
    openai::DEFAULT_LABEL.to_string()
}

fn default_chat_base_url() -> String {
    openai::DEFAULT_BASE_URL.to_string()
}

fn default_chat_model() -> String {
    openai::DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    openai::DEFAULT_MAX_TOKENS
}

/// Factory for creating provider clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create a provider client; `timeout` bounds every request it sends
    pub fn create_client(
        config: ProviderConfig,
        timeout: Duration,
    ) -> Result<Arc<dyn ProviderClient>> {
        match config.details {
            ProviderDetails::HuggingFace(hf_config) => {
                let client = huggingface::HuggingFaceClient::new(hf_config, timeout)?;
                Ok(Arc::new(client))
            }
            ProviderDetails::ChatCompletions(chat_config) => {
                let client = openai::ChatCompletionsClient::new(chat_config, timeout)?;
                Ok(Arc::new(client))
            }
        }
    }

    /// Create an ensemble over all providers, preserving their order
    pub fn create_ensemble(
        configs: impl IntoIterator<Item = ProviderConfig>,
        timeout: Duration,
    ) -> Result<ProviderEnsemble> {
        let providers = configs
            .into_iter()
            .map(|config| Self::create_client(config, timeout))
            .collect::<Result<Vec<_>>>()?;

        Ok(ProviderEnsemble::new(providers, timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huggingface_config() {
        let config = ProviderConfig::huggingface("test-key");
        assert_eq!(config.provider_type(), ProviderType::HuggingFace);
        assert_eq!(config.label(), "Hugging Face");
        assert_eq!(config.api_key_env(), "HF_API_KEY");
    }

    #[test]
    fn test_chat_completions_config() {
        let config = ProviderConfig::chat_completions("test-key", "mixtral-8x7b-32768")
            .with_label("Groq Mixtral");

        assert_eq!(config.provider_type(), ProviderType::ChatCompletions);
        assert_eq!(config.label(), "Groq Mixtral");
        assert_eq!(config.api_key(), "test-key");
        assert_eq!(config.api_key_env(), "GROQ_API_KEY");
    }

    #[test]
    fn test_deserialize_tagged_with_defaults() {
        let json = r#"{"type": "chat_completions", "api_key_env": "OTHER_KEY"}"#;
        let config: ProviderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.api_key_env(), "OTHER_KEY");
        match config.details {
            ProviderDetails::ChatCompletions(c) => {
                assert_eq!(c.model, "llama3-8b-8192");
                assert_eq!(c.base_url, "https://api.groq.com/openai/v1");
                assert!(c.api_key.is_empty());
                assert_eq!(c.max_tokens, 150);
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_api_key_never_serialized() {
        let config = ProviderConfig::huggingface("secret-key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-key"));
        assert!(json.contains("\"type\":\"hugging_face\""));
    }

    #[test]
    fn test_factory_keeps_order() {
        let ensemble = ClientFactory::create_ensemble(
            vec![
                ProviderConfig::huggingface("a"),
                ProviderConfig::chat_completions("b", "llama3-8b-8192"),
            ],
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(ensemble.labels(), vec!["Hugging Face", "Groq"]);
        assert_eq!(ensemble.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_with_url_targets_the_right_field() {
        let hf = ProviderConfig::huggingface("a").with_url("http://localhost:9000/models/x");
        let chat = ProviderConfig::chat_completions("b", "m").with_url("http://localhost:9001/v1");

        match (hf.details, chat.details) {
            (ProviderDetails::HuggingFace(h), ProviderDetails::ChatCompletions(c)) => {
                assert_eq!(h.endpoint, "http://localhost:9000/models/x");
                assert_eq!(c.base_url, "http://localhost:9001/v1");
                assert_eq!(c.max_tokens, 150);
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }
}
