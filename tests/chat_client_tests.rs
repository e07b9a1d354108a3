use std::sync::Arc;

use coursewright::core::{
    CompletionRequest, CredentialPool, GenerationConfig, LlmError, Message, TextGenerator,
};
use coursewright::provider::{OpenAiClient, OpenAiConfig, OpenRouterClient, OpenRouterConfig};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn pool(keys: &[&str]) -> Arc<CredentialPool> {
    Arc::new(CredentialPool::new(keys.iter().map(|k| k.to_string()).collect()).unwrap())
}

fn openai_client(server: &MockServer, keys: &[&str]) -> OpenAiClient {
    OpenAiClient::new(OpenAiConfig::new(pool(keys)).with_base_url(server.uri())).unwrap()
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-16k",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 }
    }))
}

fn request() -> CompletionRequest {
    CompletionRequest::new(
        vec![Message::assistant("Earlier."), Message::user("Write the next part.")],
        GenerationConfig::new(15000, 0.6),
    )
}

#[tokio::test]
async fn sends_chat_completion_payload_and_returns_trimmed_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("  A finished paragraph.\n"))
        .expect(1)
        .mount(&server)
        .await;

    let text = openai_client(&server, &["sk-one"])
        .complete(request())
        .await
        .expect("completion");
    assert_eq!(text, "A finished paragraph.");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-3.5-turbo-16k");
    assert_eq!(body["max_tokens"], 15000);
    assert!((body["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "assistant");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Write the next part.");
}

#[tokio::test]
async fn rotates_keys_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("ok."))
        .mount(&server)
        .await;

    let client = openai_client(&server, &["sk-one", "sk-two"]);
    for _ in 0..3 {
        client.complete(request()).await.unwrap();
    }

    let auth: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.headers.get("authorization").unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(auth, vec!["Bearer sk-one", "Bearer sk-two", "Bearer sk-one"]);
}

#[tokio::test]
async fn makes_exactly_one_request_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let result = openai_client(&server, &["sk-one"]).complete(request()).await;

    match result {
        Err(LlmError::Api { status_code, .. }) => assert_eq!(status_code, Some(503)),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn maps_rate_limit_and_auth_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-limited"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-revoked"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key"))
        .mount(&server)
        .await;

    let client = openai_client(&server, &["sk-limited", "sk-revoked"]);

    assert!(matches!(
        client.complete(request()).await,
        Err(LlmError::RateLimited { .. })
    ));
    assert!(matches!(
        client.complete(request()).await,
        Err(LlmError::Authentication { .. })
    ));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = openai_client(&server, &["sk-one"]).complete(request()).await;
    assert!(matches!(result, Err(LlmError::Parse { .. })));
}

#[tokio::test]
async fn empty_choices_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let result = openai_client(&server, &["sk-one"]).complete(request()).await;
    assert!(matches!(result, Err(LlmError::Parse { .. })));
}

#[tokio::test]
async fn openrouter_sends_attribution_headers_and_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("x-title", "Course Builder"))
        .and(header("http-referer", "https://courses.example"))
        .respond_with(completion("ok."))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenRouterClient::new(
        OpenRouterConfig::new(pool(&["or-key"]))
            .with_base_url(server.uri())
            .with_model("mistralai/mistral-7b-instruct")
            .with_http_referer("https://courses.example")
            .with_x_title("Course Builder"),
    )
    .unwrap();

    assert_eq!(client.complete(request()).await.unwrap(), "ok.");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "mistralai/mistral-7b-instruct");
}
