use axum::{
    Form, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use askama::Template;
use medicheck_core::{AnalysisClient, MedicalAnalysis, Notice, SymptomAnalyzer, SymptomForm};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{config::ServiceConfig, pages::IndexPage};

const APP_CSS: &str = include_str!("../assets/app.css");

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;
type ApiError = (StatusCode, Json<Value>);

fn bad_request_error(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn internal_error(message: &str, details: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "details": details
        })),
    )
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn SymptomAnalyzer>,
    pub app_title: String,
}

pub fn create_app(config: ServiceConfig) -> Router {
    let app_title = config.openrouter.app_title.clone();
    let client = AnalysisClient::new(config.openrouter);

    build_router(AppState {
        analyzer: Arc::new(client),
        app_title,
    })
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/static/app.css", get(stylesheet))
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index(State(state): State<AppState>) -> Response {
    render(IndexPage::new(&state.app_title, &SymptomForm::new(), None))
}

async fn submit_form(State(state): State<AppState>, Form(request): Form<AnalyzeRequest>) -> Response {
    let form = SymptomForm::with_input(&request.symptoms);
    let submission = form.submit(state.analyzer.as_ref()).await;

    info!(notice = ?submission.notice, "Form submission handled");

    render(IndexPage::new(&state.app_title, &form, Some(&submission)))
}

const RENDER_FAILED_HTML: &str = "Unable to display the page. Please try again.";

fn render(page: IndexPage) -> Response {
    page_response(page.render())
}

fn page_response(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILED_HTML)).into_response()
        }
    }
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<MedicalAnalysis> {
    let form = SymptomForm::with_input(&request.symptoms);
    let submission = form.submit(state.analyzer.as_ref()).await;

    match (submission.notice, submission.analysis) {
        (Notice::Complete, Some(analysis)) => Ok(Json(analysis)),
        (Notice::MissingSymptoms, _) => Err(bad_request_error("Symptoms description is required")),
        (notice, _) => Err(internal_error(
            "Unable to analyze symptoms",
            notice.description(),
        )),
    }
}
