mod config;
mod errors;
mod evaluation;
mod gatherer;
mod llm_client;
mod resume;
mod routes;
mod session;
mod state;
mod templates;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gatherer::fetcher::HttpPageFetcher;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Re-Sift API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client
    let llm = LlmClient::new(config.llm_api_url.clone(), config.groq_api_key.clone())?;
    info!(
        "LLM client initialized (evaluation: {}, summary: {})",
        config.evaluation_model, config.summary_model
    );

    // Initialize page fetcher for context gathering
    let fetcher = HttpPageFetcher::new()?;
    info!(
        "Page fetcher initialized (timeout: {}s)",
        config.fetch_timeout_secs
    );

    let state = AppState::new(config.clone(), Arc::new(llm), Arc::new(fetcher));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
