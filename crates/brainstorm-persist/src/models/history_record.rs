use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the external `messages` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub role: String,
    /// Nullable column; a missing or null value reads as empty text
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

// Conversion: HistoryRecord → brainstorm_llm::Message
impl From<HistoryRecord> for brainstorm_llm::Message {
    fn from(record: HistoryRecord) -> Self {
        brainstorm_llm::Message::new(record.role, record.content.unwrap_or_default())
    }
}
