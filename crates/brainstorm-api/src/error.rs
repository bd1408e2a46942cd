use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("History error: {0}")]
    History(#[from] brainstorm_persist::PersistError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::History(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::BadRequest(_) => {
                tracing::warn!("{}", self);
                self.to_string()
            }
            ApiError::History(ref e) => {
                tracing::error!("History fetch failed: {}", e);
                "Conversation history unavailable".to_string()
            }
        };

        error_response(self.status_code(), message)
    }
}

/// Uniform `{"status": "error", "message": ...}` body
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(json!({
        "status": "error",
        "message": message.into(),
    }));

    (status, body).into_response()
}

pub type ApiResult<T> = Result<T, ApiError>;
