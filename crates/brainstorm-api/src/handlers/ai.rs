use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use brainstorm_context::{build_context, detect_self_reference};
use brainstorm_llm::Message;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AiRequest {
    /// When absent the conversation is read from the history store
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AiResponse {
    pub context: String,
    /// One entry per configured provider, in configuration order
    pub responses: Vec<String>,
}

/// Build the context once and fan it out to every configured provider.
///
/// Provider failures come back as labeled strings inside a 200; only a bad
/// request body or an unreachable history store fail the whole call.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<AiResponse>> {
    let request = parse_request(&body)?;

    let messages = match request.messages {
        Some(messages) => messages,
        None => {
            let history = state.history.as_ref().ok_or_else(|| {
                ApiError::BadRequest("messages are required".to_string())
            })?;
            history.fetch_conversation().await?
        }
    };

    let context = build_context(&messages);

    let self_reference = messages
        .last()
        .map(|m| detect_self_reference(&m.content))
        .unwrap_or(false);
    tracing::info!(
        messages = messages.len(),
        providers = state.ensemble.len(),
        self_reference,
        "Dispatching context"
    );

    let results = state.ensemble.dispatch(&context).await;

    Ok(Json(AiResponse {
        context,
        responses: results.iter().map(ToString::to_string).collect(),
    }))
}

fn parse_request(body: &[u8]) -> ApiResult<AiRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AiRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}
