use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::analysis::AnalysisGateway;
use crate::config::Config;
use crate::github::GithubClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis backs the one-hour GitHub profile cache.
    pub redis: RedisClient,
    pub github: GithubClient,
    /// Pluggable analysis gateway. Production uses `LlmAnalysisGateway`;
    /// tests substitute a recording stub.
    pub gateway: Arc<dyn AnalysisGateway>,
    pub config: Config,
}
