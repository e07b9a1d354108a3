mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{ScriptedGenerator, fast_config, rate_limited, words};
use coursewright::article::{ArticleGenerator, BatchProcessor};
use coursewright::server::{AppState, SharedGenerator, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(stub: &Arc<ScriptedGenerator>) -> Router {
    let generator: SharedGenerator = stub.clone();
    let article_generator = ArticleGenerator::new(generator).with_config(fast_config());
    create_router(AppState::new(BatchProcessor::new(article_generator)))
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-article")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn generates_sections_end_to_end() {
    let stub = Arc::new(ScriptedGenerator::new(vec![Ok(words(60)), Ok(words(50))]));
    let body = json!({
        "sections": [{ "title": "Intro", "word_count": "50" }],
        "prefixes": null,
        "save_conversation_history": false
    });

    let (status, payload) = post_json(app(&stub), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let result = payload["result"].as_array().unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["title"], "Intro");
    assert_eq!(result[0]["word_count"], 50);
    assert_eq!(result[0]["content"], words(50));
}

#[tokio::test]
async fn accepts_numeric_word_counts() {
    let stub = Arc::new(ScriptedGenerator::new(vec![Ok(words(12))]));
    let body = json!({ "sections": [{ "title": "Intro", "word_count": 12, "info": "Beginners." }] });

    let (status, payload) = post_json(app(&stub), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["result"][0]["word_count"], 12);
}

#[tokio::test]
async fn malformed_word_count_is_a_bad_request() {
    let stub = Arc::new(ScriptedGenerator::new(vec![]));
    let body = json!({ "sections": [{ "title": "Intro", "word_count": "a lot" }] });

    let (status, payload) = post_json(app(&stub), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"].as_str().unwrap().contains("Invalid word count"));
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn unparseable_body_is_a_bad_request() {
    let stub = Arc::new(ScriptedGenerator::new(vec![]));

    let (status, payload) = post_json(app(&stub), "{\"sections\": 3}".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn generation_failure_is_a_server_error() {
    let stub = Arc::new(ScriptedGenerator::new(vec![]).with_fallback(|_| Err(rate_limited())));
    let body = json!({ "sections": [{ "title": "Intro", "word_count": "50" }] });

    let (status, payload) = post_json(app(&stub), body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .contains("Draft generation failed after 3 attempts")
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let stub = Arc::new(ScriptedGenerator::new(vec![]));

    let response = app(&stub)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let stub = Arc::new(ScriptedGenerator::new(vec![]));

    let response = app(&stub)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "https://courses.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
