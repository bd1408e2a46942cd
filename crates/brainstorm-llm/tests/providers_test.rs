use std::time::Duration;

use brainstorm_llm::{
    ChatCompletionsClient, ChatCompletionsConfig, HuggingFaceClient, HuggingFaceConfig, Outcome,
    ProviderClient, ProviderError,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn chat_client(server: &MockServer) -> ChatCompletionsClient {
    let config = ChatCompletionsConfig::new("test-key", "llama3-8b-8192").with_base_url(server.uri());
    ChatCompletionsClient::new(config, TIMEOUT).unwrap()
}

async fn hf_client(server: &MockServer) -> HuggingFaceClient {
    let config = HuggingFaceConfig::new("hf-key").with_endpoint(format!("{}/models/gpt2", server.uri()));
    HuggingFaceClient::new(config, TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_chat_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama3-8b-8192",
            "messages": [{ "role": "user", "content": "Topics: model" }],
            "max_tokens": 150
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-123",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "A fresh idea" },
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;

    let client = chat_client(&server).await;
    let result = client.call("Topics: model").await;

    assert_eq!(result.label, "Groq");
    assert_eq!(result.outcome, Outcome::Success("A fresh idea".to_string()));
    assert_eq!(result.to_string(), "Groq: A fresh idea");
}

#[tokio::test]
async fn test_chat_completion_no_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = chat_client(&server).await;
    let result = client.call("hello").await;

    assert_eq!(result.to_string(), "Groq: Error no choices in response");
}

#[tokio::test]
async fn test_chat_completion_http_error_includes_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid api key\"}"))
        .mount(&server)
        .await;

    let client = chat_client(&server).await;
    let err = client.generate("hello").await.unwrap_err();

    match &err {
        ProviderError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let flattened = client.call("hello").await.to_string();
    assert!(flattened.starts_with("Groq: Error (401 Unauthorized)"));
    assert!(flattened.contains("invalid api key"));
}

#[tokio::test]
async fn test_chat_completion_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = chat_client(&server).await;
    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::Decode(_)));
}

/// Base URL of a local port with nothing listening on it
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_connection_refused_is_a_failure_string() {
    let config = ChatCompletionsConfig::new("test-key", "llama3-8b-8192").with_base_url(closed_port_url());
    let client = ChatCompletionsClient::new(config, TIMEOUT).unwrap();

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));

    let result = client.call("hello").await;
    assert!(!result.is_success());
    assert!(result.to_string().starts_with("Groq: Error request failed"));
}

#[tokio::test]
async fn test_request_timeout_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ChatCompletionsConfig::new("test-key", "llama3-8b-8192").with_base_url(server.uri());
    let client = ChatCompletionsClient::new(config, Duration::from_millis(100)).unwrap();

    let err = client.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout(_)));
}

#[tokio::test]
async fn test_huggingface_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .and(header("authorization", "Bearer hf-key"))
        .and(body_partial_json(json!({
            "inputs": "prompt text",
            "parameters": { "max_new_tokens": 150 }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "prompt text and more" }])),
        )
        .mount(&server)
        .await;

    let client = hf_client(&server).await;
    let result = client.call("prompt text").await;

    assert_eq!(result.to_string(), "Hugging Face: prompt text and more");
}

#[tokio::test]
async fn test_huggingface_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({ "error": "Model gpt2 is currently loading" })),
        )
        .mount(&server)
        .await;

    let client = hf_client(&server).await;
    let text = client.call("hello").await.to_string();

    assert!(text.starts_with("Hugging Face: Error (503 Service Unavailable)"));
    assert!(text.contains("currently loading"));
}
