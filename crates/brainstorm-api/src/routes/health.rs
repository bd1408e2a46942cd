use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness message at the root path
pub async fn home() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Backend is alive".to_string(),
    })
}

/// Health check endpoint
///
/// Reports only that the process is serving; providers are not probed.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
