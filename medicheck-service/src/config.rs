use medicheck_core::OpenRouterConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Process-level settings, read once at start.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub openrouter: OpenRouterConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let default_referer = format!("http://localhost:{}", port);

        Self {
            port,
            openrouter: OpenRouterConfig::from_env(&default_referer),
        }
    }
}
