use medicheck_service::{ServiceConfig, create_app};
use tokio::net::TcpListener;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServiceConfig::from_env();

    if config.openrouter.api_key.is_empty() {
        warn!("OPENROUTER_API_KEY is not set; every analysis will return the fallback payload");
    }

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    let addr = listener.local_addr()?;

    info!(model = %config.openrouter.model, "MediCheck AI starting on {}", addr);
    info!("Symptom form: http://{}/", addr);
    info!("Health check endpoint: http://{}/health", addr);
    info!("Analysis endpoint: POST http://{}/api/analyze", addr);

    let app = create_app(config);
    axum::serve(listener, app).await?;

    Ok(())
}
