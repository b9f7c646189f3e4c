use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use persona_gateway::api;
use persona_gateway::domain::{GenerationMode, ModelClient, UpstreamError};
use persona_gateway::infrastructure::AppState;
use persona_gateway::server;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

/// Model stub returning a fixed reply (or error) and counting calls
struct StubModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubModel {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for StubModel {
    async fn generate(&self, _prompt: &str, _mode: GenerationMode) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(|message| UpstreamError::Provider {
            status: 503,
            message,
        })
    }
}

fn setup_app(model: Arc<StubModel>) -> Router {
    api::api_router(AppState::new(model))
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_analyze_personality_success() {
    let model_output = json!({
        "personality_tags": ["minimalist", "tech-savvy", "night-owl"],
        "suggested_theme": "dark_minimalist"
    });
    let model = StubModel::replying(&model_output.to_string());
    let app = setup_app(model.clone());

    let payload = json!({
        "user_id": "u1",
        "posts": ["I love minimalist design", "Always coding at 2am"]
    });
    let (status, body) = send(
        app,
        post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, model_output);
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_analyze_personality_with_chatty_model() {
    let model = StubModel::replying(
        "Here you go:\n{\"personality_tags\":[\"creative\",\"formal\",\"calm\"],\"suggested_theme\":\"soft_pastel\"}\nEnjoy!",
    );
    let app = setup_app(model);

    let payload = json!({ "user_id": "u2", "posts": ["Painting all weekend"] });
    let (status, body) = send(
        app,
        post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggested_theme"], "soft_pastel");
    assert_eq!(body["personality_tags"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_analyze_personality_invalid_input_never_calls_model() {
    let model = StubModel::replying("{}");
    let app = setup_app(model.clone());

    let bad_payloads = [
        json!({ "user_id": "u1" }),
        json!({ "posts": ["hello"] }),
        json!({ "user_id": "u1", "posts": "hello" }),
        json!({ "user_id": "u1", "posts": ["ok", 7] }),
        json!({ "user_id": 5, "posts": [] }),
        json!([1, 2, 3]),
    ];

    for payload in bad_payloads {
        let (status, body) = send(
            app.clone(),
            post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["error"], "Invalid request body");
        assert!(body["details"].is_string());
    }

    // Invalid JSON
    let (status, body) = send(app, post_json("/analyze-personality", "invalid json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_analyze_personality_unparseable_model_output() {
    let model = StubModel::replying("Sorry, I can't analyze that.");
    let app = setup_app(model);

    let payload = json!({ "user_id": "u1", "posts": ["hello"] });
    let (status, body) = send(
        app,
        post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process AI request");
    assert!(body["details"].as_str().unwrap().contains("not valid JSON"));
}

#[tokio::test]
async fn test_analyze_personality_schema_mismatch() {
    let model = StubModel::replying(r#"{"personality_tags":["calm","kind","shy"]}"#);
    let app = setup_app(model);

    let payload = json!({ "user_id": "u1", "posts": ["hello"] });
    let (status, body) = send(
        app,
        post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["details"].as_str().unwrap().contains("suggested_theme"));
}

#[tokio::test]
async fn test_analyze_personality_accepts_body_over_2_mib() {
    let model_output = json!({
        "personality_tags": ["prolific", "verbose", "consistent"],
        "suggested_theme": "newspaper"
    });
    let model = StubModel::replying(&model_output.to_string());
    let app = setup_app(model.clone());

    let posts: Vec<String> = (0..3000).map(|_| "x".repeat(1000)).collect();
    let payload = serde_json::to_vec(&json!({ "user_id": "u1", "posts": posts })).unwrap();
    assert!(payload.len() > 2 * 1024 * 1024);

    let (status, body) = send(app, post_json("/analyze-personality", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, model_output);
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_chat_success() {
    let model = StubModel::replying("Hello! How can I help you build your profile today?");
    let app = setup_app(model.clone());

    let (status, body) = send(app, post_json("/chat", r#"{"message":"Hi there"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "reply": "Hello! How can I help you build your profile today?" })
    );
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_chat_blank_message_never_calls_model() {
    let model = StubModel::replying("unused");
    let app = setup_app(model.clone());

    for payload in [r#"{}"#, r#"{"message":""}"#, r#"{"message":"   \n\t"}"#] {
        let (status, body) = send(app.clone(), post_json("/chat", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["error"], "Missing 'message' field");
    }

    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_provider_error_returns_500_and_server_keeps_serving() {
    let failing = StubModel::failing("quota exceeded");
    let app = setup_app(failing.clone());

    let (status, body) = send(app.clone(), post_json("/chat", r#"{"message":"Hi"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process chat");
    assert!(body["details"].as_str().unwrap().contains("quota exceeded"));

    let payload = json!({ "user_id": "u1", "posts": ["hello"] });
    let (status, body) = send(
        app.clone(),
        post_json("/analyze-personality", serde_json::to_vec(&payload).unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process AI request");

    // Same router still answers validation failures
    let (status, _) = send(app, post_json("/chat", r#"{"message":" "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(failing.calls(), 2);
}

#[tokio::test]
async fn test_only_post_is_routed() {
    let app = setup_app(StubModel::replying("unused"));

    for uri in ["/chat", "/analyze-personality"] {
        let req = Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), req).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "uri: {}", uri);
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    let req = Request::builder()
        .uri("/health")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_full_router_serves_with_cors() {
    let model = StubModel::replying("Hi!");
    let app = server::build_router(
        AppState::new(model),
        &["http://localhost:5173".to_string()],
    );

    let req = Request::builder()
        .uri("/chat")
        .method("POST")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"hello"}"#))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}
