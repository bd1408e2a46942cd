use serde::{Deserialize, Serialize};

/// A single conversation turn.
///
/// `role` is a free-form label ("user", "assistant", ...). Ordering of
/// messages inside a conversation is significant and always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Render as a transcript line
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.role, self.content)
    }
}
