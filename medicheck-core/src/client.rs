use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::{
    analysis::MedicalAnalysis,
    config::OpenRouterConfig,
    error::{AnalysisError, Result},
    extract::extract_json_object,
    prompt::build_prompt,
};

const MAX_LOGGED_BODY_CHARS: usize = 200;

/// Anything that can turn a symptom description into an analysis.
///
/// The form collector only talks to this trait, which keeps it independent of
/// the HTTP client and lets it handle a failing analyzer even though
/// [`AnalysisClient`] never fails.
#[async_trait]
pub trait SymptomAnalyzer: Send + Sync {
    async fn analyze(&self, symptoms: &str) -> anyhow::Result<MedicalAnalysis>;
}

/// Client for an OpenRouter-compatible chat-completion endpoint.
///
/// One request per call, no retries, no caching, transport-default timeouts.
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: Arc<OpenRouterConfig>,
    fallback: Arc<MedicalAnalysis>,
}

impl AnalysisClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: OpenRouterConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
            fallback: Arc::new(MedicalAnalysis::fallback()),
        }
    }

    pub fn fallback(&self) -> &MedicalAnalysis {
        &self.fallback
    }

    /// Analyze symptoms, returning the fallback payload on any failure.
    pub async fn analyze(&self, symptoms: &str) -> MedicalAnalysis {
        let span = info_span!(
            "symptom_analysis",
            request_id = %Uuid::new_v4(),
            symptom_chars = symptoms.chars().count()
        );

        async {
            match self.try_analyze(symptoms).await {
                Ok(analysis) => {
                    info!(disease = %analysis.disease, "Symptom analysis completed");
                    analysis
                }
                Err(e) => {
                    warn!(kind = e.kind(), error = %e, "Symptom analysis failed, returning fallback");
                    self.fallback.as_ref().clone()
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Analyze symptoms and report why it failed, if it did.
    pub async fn try_analyze(&self, symptoms: &str) -> Result<MedicalAnalysis> {
        let prompt = build_prompt(symptoms);
        let content = self.complete(&prompt).await?;

        let json = extract_json_object(&content).ok_or(AnalysisError::NoJsonObject)?;
        debug!(json_chars = json.len(), "Extracted JSON object from model reply");

        MedicalAnalysis::from_model_json(json)
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, "Sending chat completion request");

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(self.config.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&body)
            .send()
            .await
            .map_err(AnalysisError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status {
                status,
                body: text.chars().take(MAX_LOGGED_BODY_CHARS).collect(),
            });
        }

        let completion: ChatResponse = response.json().await.map_err(AnalysisError::Decode)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalysisError::EmptyContent)
    }
}

#[async_trait]
impl SymptomAnalyzer for AnalysisClient {
    async fn analyze(&self, symptoms: &str) -> anyhow::Result<MedicalAnalysis> {
        Ok(AnalysisClient::analyze(self, symptoms).await)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
