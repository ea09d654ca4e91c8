//! FoodBridge - connecting surplus food to NGOs
//!
//! A session-scoped service where event organizers list events with expected
//! food surplus, NGOs express interest in them, and a hosted language model
//! answers questions about the platform.

mod api;
mod assistant;
mod config;
mod domain;
mod error;
mod events;
mod llm;
mod session;

use api::{create_router, AppState};
use assistant::Assistant;
use config::Config;
use llm::{GroqService, LlmService, LoggingService};
use session::SessionRegistry;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often idle sessions are looked for
const REAP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodbridge=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration; a missing credential stops startup here
    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        error::FoodBridgeError::from(e)
    })?;

    let provider: Arc<dyn LlmService> = Arc::new(GroqService::new(&config.llm)?);
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(provider));
    tracing::info!(
        model = %llm.model_id(),
        history_messages = config.history_messages,
        timeout_secs = config.llm.timeout.as_secs(),
        "Assistant initialized"
    );

    let sessions = Arc::new(SessionRegistry::new(config.session_idle_ttl));
    sessions.spawn_reaper(REAP_INTERVAL.min(config.session_idle_ttl));
    tracing::info!(
        idle_ttl_secs = config.session_idle_ttl.as_secs(),
        "Session reaper started"
    );

    let state = AppState::new(sessions, Assistant::new(llm, config.history_messages));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("FoodBridge server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
