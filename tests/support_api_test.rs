// tests/support_api_test.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use clarity::api::{app_router, HealthResponse};
use clarity::classifier::{FeatureVector, Intent, IntentClassifier};
use clarity::generator::{ResponseGenerator, MISSING_API_KEY_MESSAGE};
use clarity::llm::TextCompletion;
use clarity::pipeline::{SupportPipeline, EMPTY_INPUT_WARNING};
use clarity::state::AppState;

/// Keyword classifier that counts how often it runs
#[derive(Default)]
struct StubClassifier {
    calls: AtomicUsize,
}

impl IntentClassifier for StubClassifier {
    fn vectorize(&self, text: &str) -> FeatureVector {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let hit = text.split_whitespace().any(|w| w == "anxious");
        FeatureVector::new(1, if hit { vec![(0, 1.0)] } else { vec![] })
    }

    fn predict(&self, features: &FeatureVector) -> Intent {
        if features.is_empty() { Intent::new("neutral") } else { Intent::new("anxiety") }
    }
}

/// Echoes the intent line of the prompt back
#[derive(Default)]
struct EchoCompletion {
    calls: AtomicUsize,
}

#[async_trait]
impl TextCompletion for EchoCompletion {
    fn name(&self) -> &str {
        "echo-model"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let line = prompt
            .lines()
            .find(|l| l.contains("classified as"))
            .unwrap_or_default();
        Ok(format!("echo: {line}"))
    }
}

struct Harness {
    app: axum::Router,
    classifier: Arc<StubClassifier>,
    completion: Option<Arc<EchoCompletion>>,
}

fn harness(with_completion: bool) -> Harness {
    let classifier = Arc::new(StubClassifier::default());
    let completion = with_completion.then(|| Arc::new(EchoCompletion::default()));

    let generator = ResponseGenerator::new(
        completion.clone().map(|c| c as Arc<dyn TextCompletion>),
        "Clarity",
    );
    let pipeline = SupportPipeline::new(classifier.clone(), generator);
    let app = app_router(AppState::new(pipeline));

    Harness { app, classifier, completion }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/support")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_json_support_round_trip() {
    let h = harness(true);

    let response = h
        .app
        .clone()
        .oneshot(json_request(json!({"message": "I'm SO anxious about tomorrow!!"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["intent"], "anxiety");
    assert_eq!(body["cleaned"], "im so anxious about tomorrow");
    assert_eq!(body["response"], "echo: The user's intent is classified as: anxiety.");

    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.completion.unwrap().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_json_empty_input_is_rejected_before_any_stage() {
    let h = harness(true);

    for body in [json!({"message": ""}), json!({"message": "   "}), json!({}), json!({"message": 42})] {
        let response = h.app.clone().oneshot(json_request(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let error: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(error["message"], EMPTY_INPUT_WARNING);
        assert_eq!(error["error_code"], "EMPTY_INPUT");
    }

    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.completion.unwrap().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_json_gets_json_error_body() {
    let h = harness(true);

    let request = Request::builder()
        .method("POST")
        .uri("/api/support")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "#))
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(error["error"], true);
    assert_eq!(error["status"], 400);
    assert_eq!(error["error_code"], "INVALID_JSON");
    assert!(!error["message"].as_str().unwrap().is_empty());
    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_content_type_gets_json_error_body() {
    let h = harness(true);

    let request = Request::builder()
        .method("POST")
        .uri("/api/support")
        .body(Body::from(json!({"message": "hi"}).to_string()))
        .unwrap();
    let response = h.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let error: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(error["status"], 415);
    assert_eq!(error["error_code"], "UNSUPPORTED_MEDIA_TYPE");
    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_digits_only_input_still_classified() {
    let h = harness(true);

    let response = h.app.clone().oneshot(json_request(json!({"message": "123"}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(reply["cleaned"], "");
    assert_eq!(reply["intent"], "neutral");
    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_json_without_api_key_returns_sentinel() {
    let h = harness(false);

    let response = h
        .app
        .oneshot(json_request(json!({"message": "hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["intent"], "neutral");
    assert_eq!(body["response"], MISSING_API_KEY_MESSAGE);
}

#[tokio::test]
async fn test_form_page_renders() {
    let h = harness(true);

    let response = h
        .app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Clarity: Mental Health Assistant"));
    assert!(html.contains("How are you feeling right now?"));
}

#[tokio::test]
async fn test_form_submission_shows_intent_and_response() {
    let h = harness(true);

    let response = h
        .app
        .oneshot(form_request("message=feeling+anxious+%26+tired"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Detected Intent: <strong>ANXIETY</strong>"));
    assert!(html.contains("Clarity's Response:"));
    assert!(html.contains("echo: The user&#39;s intent is classified as: anxiety."));
    assert!(html.contains("feeling anxious &amp; tired</textarea>"));
}

#[tokio::test]
async fn test_form_empty_submission_warns() {
    let h = harness(true);

    let response = h.app.clone().oneshot(form_request("message=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(EMPTY_INPUT_WARNING));
    assert!(!html.contains("Detected Intent"));

    assert_eq!(h.classifier.calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.completion.unwrap().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_health_reports_generation_state() {
    for (with_completion, model) in [(true, Some("echo-model")), (false, None)] {
        let h = harness(with_completion);
        let response = h
            .app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.generation_enabled, with_completion);
        assert_eq!(health.model.as_deref(), model);
    }
}
