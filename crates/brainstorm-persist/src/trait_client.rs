use async_trait::async_trait;
use brainstorm_llm::Message;

use crate::error::Result;

/// Read-only access to the external conversation history
///
/// Implementations return the whole conversation ordered by creation time.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn fetch_conversation(&self) -> Result<Vec<Message>>;
}
