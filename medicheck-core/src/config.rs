use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "x-ai/grok-4-fast:free";
pub const DEFAULT_APP_TITLE: &str = "MediCheck AI";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// OpenRouter API key. Never printed: `Debug` redacts the value.
#[derive(Clone, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ApiKey(<unset>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

/// Settings for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub model: String,
    /// Sent as `HTTP-Referer` to identify the calling site.
    pub referer: String,
    /// Sent as `X-Title`.
    pub app_title: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>, referer: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: referer.into(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Read settings from the environment.
    ///
    /// `OPENROUTER_API_KEY` is not required here: without it every call is
    /// rejected upstream and analyses fall back.
    pub fn from_env(default_referer: &str) -> Self {
        Self {
            api_key: ApiKey::new(env_var("OPENROUTER_API_KEY").unwrap_or_default()),
            base_url: env_var("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: env_var("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            referer: env_var("MEDICHECK_PUBLIC_URL").unwrap_or_else(|| default_referer.to_string()),
            app_title: env_var("MEDICHECK_APP_TITLE")
                .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
