use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use devfind_api::config::Config;
use devfind_api::llm_client::{self, LlmClient};
use devfind_api::routes::build_router;
use devfind_api::state::AppState;
use devfind_api::storage::MemStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = &config.rust_log;
            EnvFilter::new(format!(
                "devfind_api={level},{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting devfind API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(MemStorage::new());
    info!("In-memory store initialized");

    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone()).context("failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; /api/extract-filters will answer 503");
            None
        }
    };

    let state = AppState::new(store, llm, config.clone());

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
