mod analysis;
mod config;
mod db;
mod errors;
mod github;
mod llm_client;
mod portfolio;
mod resume;
mod routes;
mod state;
mod visitors;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::LlmAnalysisGateway;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::github::GithubClient;
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

    info!("Starting GitFolio API v{}", env!("CARGO_PKG_VERSION"));
    config.warn_if_unauthenticated();

    // Initialize PostgreSQL (visitor counter store)
    let pool = create_pool(&config.database_url).await?;
    ensure_schema(&pool).await?;

    // Initialize Redis (GitHub profile cache)
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Initialize GitHub client
    let github = GithubClient::new(config.github_token.clone());
    info!("GitHub client initialized");

    // Initialize the analysis gateway over the shared LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let gateway = Arc::new(LlmAnalysisGateway::new(llm));
    info!("Analysis gateway initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db: pool,
        redis,
        github,
        gateway,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
