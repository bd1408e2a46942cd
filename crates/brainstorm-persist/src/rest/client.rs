use std::time::Duration;

use async_trait::async_trait;
use brainstorm_llm::Message;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{PersistError, Result};
use crate::models::HistoryRecord;
use crate::trait_client::HistoryStore;

/// History store backed by a PostgREST endpoint (`/rest/v1/<table>`)
pub struct RestHistoryClient {
    http_client: reqwest::Client,
    table_url: String,
    order_column: String,
}

impl RestHistoryClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        table: &str,
        order_column: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| PersistError::Config("Invalid history API key format".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| PersistError::Config("Invalid history API key format".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            order_column: order_column.into(),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

#[async_trait]
impl HistoryStore for RestHistoryClient {
    async fn fetch_conversation(&self) -> Result<Vec<Message>> {
        let select = format!("role,content,{}", self.order_column);
        let order = format!("{}.asc", self.order_column);

        let response = self
            .http_client
            .get(&self.table_url)
            .query(&[("select", select.as_str()), ("order", order.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PersistError::Status { status, body });
        }

        let body = response.bytes().await?;
        let records: Vec<HistoryRecord> = serde_json::from_slice(&body)?;

        tracing::debug!(count = records.len(), "Fetched conversation history");

        Ok(records.into_iter().map(Message::from).collect())
    }
}
