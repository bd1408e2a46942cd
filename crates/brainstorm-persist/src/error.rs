use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("History store returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Invalid history payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PersistError>;
