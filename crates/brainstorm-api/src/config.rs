use brainstorm_llm::ProviderConfig;
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
    #[serde(default)]
    pub history: Option<HistoryConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_server_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
    #[serde(default)]
    pub allow_credentials: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Per-provider request timeout
    #[serde(default = "default_provider_timeout")]
    pub request_timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_provider_timeout(),
        }
    }
}

impl LlmConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    pub base_url: String,
    #[serde(default = "default_history_table")]
    pub table: String,
    #[serde(default = "default_order_column")]
    pub order_column: String,
    /// Secret, from HISTORY_API_KEY only
    #[serde(skip)]
    pub api_key: String,
}

impl HistoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            table: default_history_table(),
            order_column: default_order_column(),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_server_timeout() -> u64 {
    120
}

fn default_provider_timeout() -> u64 {
    30_000
}

fn default_history_table() -> String {
    brainstorm_persist::builder::DEFAULT_TABLE.to_string()
}

fn default_order_column() -> String {
    brainstorm_persist::builder::DEFAULT_ORDER_COLUMN.to_string()
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. {CONFIG_DIR}/default.toml
    /// 2. {CONFIG_DIR}/{ENV}.toml (ENV defaults to "dev")
    /// 3. BRAINSTORM_* variables, `__` between levels (BRAINSTORM_SERVER__PORT)
    /// 4. Secrets and deployment overrides (provider keys, HISTORY_*, ALLOWED_ORIGINS)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(
                Environment::with_prefix("BRAINSTORM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.apply_env(|name| std::env::var(name).ok())?;

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Fill secrets and overrides from the environment.
    ///
    /// `lookup` is the variable source so tests never touch the process env.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        for provider in &mut self.providers {
            if !provider.api_key().is_empty() {
                continue;
            }
            let var = provider.api_key_env().to_string();
            let key = lookup(&var).filter(|k| !k.is_empty()).ok_or_else(|| {
                ConfigError::Message(format!("{} environment variable is required", var))
            })?;
            provider.set_api_key(key);
        }

        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            self.cors.origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(url) = lookup("HISTORY_URL") {
            match &mut self.history {
                Some(history) => history.base_url = url,
                None => self.history = Some(HistoryConfig::new(url)),
            }
        }

        if let Some(history) = &mut self.history {
            history.api_key = lookup("HISTORY_API_KEY")
                .filter(|k| !k.is_empty())
                .ok_or_else(|| {
                    ConfigError::Message(
                        "HISTORY_API_KEY environment variable is required".to_string(),
                    )
                })?;
        }

        Ok(())
    }
}
