mod client;

pub use client::{
    ChatCompletionsClient, DEFAULT_BASE_URL, DEFAULT_LABEL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
