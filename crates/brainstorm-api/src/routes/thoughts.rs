use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveThoughtRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveThoughtResponse {
    pub status: String,
    pub thought: String,
}

/// Echo a thought back. Nothing is stored and `/ai` never sees it.
pub async fn save_thought(body: Bytes) -> ApiResult<Json<SaveThoughtResponse>> {
    let req: SaveThoughtRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(SaveThoughtResponse {
        status: "saved".to_string(),
        thought: req.content,
    }))
}
