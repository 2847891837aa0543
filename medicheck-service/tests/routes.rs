use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use medicheck_core::{MedicalAnalysis, SymptomAnalyzer};
use medicheck_service::{AppState, build_router};
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// Analyzer that records calls and returns a canned answer.
struct RecordingAnalyzer {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl SymptomAnalyzer for RecordingAnalyzer {
    async fn analyze(&self, _symptoms: &str) -> anyhow::Result<MedicalAnalysis> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("upstream unavailable");
        }
        Ok(MedicalAnalysis {
            disease: "Common Cold".to_string(),
            confidence: "High".to_string(),
            description: "Viral infection of the upper respiratory tract".to_string(),
            precautions: vec!["Rest".to_string()],
            medications: vec!["Paracetamol (consult doctor before taking)".to_string()],
            workouts: vec!["Light walking".to_string()],
            diets: vec!["Warm fluids".to_string()],
        })
    }
}

fn app(fail: bool) -> (Router, Arc<RecordingAnalyzer>) {
    let analyzer = Arc::new(RecordingAnalyzer {
        calls: AtomicUsize::new(0),
        fail,
    });
    let router = build_router(AppState {
        analyzer: analyzer.clone(),
        app_title: "MediCheck AI".to_string(),
    });
    (router, analyzer)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_serves_empty_form() {
    let (router, _) = app(false);
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Describe Your Symptoms"));
    assert!(html.contains("<title>MediCheck AI</title>"));
}

#[tokio::test]
async fn whitespace_form_submission_skips_analysis() {
    let (router, analyzer) = app(false);
    let response = router.oneshot(form_post("symptoms=+++%0A")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Please describe your symptoms"));
    assert!(!html.contains("Possible Condition"));
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_submission_renders_results() {
    let (router, analyzer) = app(false);
    let response = router
        .oneshot(form_post("symptoms=runny+nose+and+sneezing"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Analysis Complete"));
    assert!(html.contains("Common Cold"));
    assert!(html.contains("High Confidence"));
    assert!(html.contains("tier-success"));
    assert!(html.contains("runny nose and sneezing"));
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_analyzer_shows_failure_notice() {
    let (router, _) = app(true);
    let response = router.oneshot(form_post("symptoms=cough")).await.unwrap();

    let html = body_text(response).await;
    assert!(html.contains("Analysis Failed"));
    assert!(!html.contains("Possible Condition"));
}

#[tokio::test]
async fn api_rejects_blank_symptoms() {
    let (router, analyzer) = app(false);
    let response = router.oneshot(json_post(r#"{"symptoms":"  "}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn api_returns_analysis_json() {
    let (router, _) = app(false);
    let response = router
        .oneshot(json_post(r#"{"symptoms":"sore throat"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["disease"], "Common Cold");
    assert_eq!(body["workouts"][0], "Light walking");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (router, _) = app(false);
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}
