use std::time::Duration;

use crate::error::{PersistError, Result};
use crate::rest::RestHistoryClient;

pub const DEFAULT_TABLE: &str = "messages";
pub const DEFAULT_ORDER_COLUMN: &str = "created_at";

pub struct RestHistoryClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    table: String,
    order_column: String,
    timeout: Duration,
}

impl RestHistoryClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            table: DEFAULT_TABLE.to_string(),
            order_column: DEFAULT_ORDER_COLUMN.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn order_column(mut self, column: impl Into<String>) -> Self {
        self.order_column = column.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RestHistoryClient> {
        let base_url = self
            .base_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| PersistError::Config("base_url is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| PersistError::Config("api_key is required".to_string()))?;

        RestHistoryClient::new(
            &base_url,
            &api_key,
            &self.table,
            self.order_column,
            self.timeout,
        )
    }
}

impl Default for RestHistoryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
