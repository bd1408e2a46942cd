mod client;

pub use client::{HuggingFaceClient, DEFAULT_ENDPOINT, DEFAULT_LABEL, DEFAULT_MAX_NEW_TOKENS};
