use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single provider call produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Outcome {
    /// Generated text
    Success(String),

    /// Human-readable failure reason
    Failure(String),
}

/// Labeled result of one provider call.
///
/// Kept tagged until the HTTP edge, where `Display` flattens it to the
/// `"<label>: <text>"` / `"<label>: Error <reason>"` wire strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResult {
    pub label: String,
    pub outcome: Outcome,
}

impl ProviderResult {
    pub fn success(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outcome: Outcome::Success(text.into()),
        }
    }

    pub fn failure(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outcome: Outcome::Failure(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
}

impl fmt::Display for ProviderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success(text) => write!(f, "{}: {}", self.label, text),
            Outcome::Failure(reason) => write!(f, "{}: Error {}", self.label, reason),
        }
    }
}
