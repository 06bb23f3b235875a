pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::portfolio::handlers as portfolio_handlers;
use crate::resume;
use crate::state::AppState;
use crate::visitors;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/v1/portfolios/:handle",
            get(portfolio_handlers::handle_get_portfolio),
        )
        .route(
            "/api/v1/portfolios/:handle/analyze",
            post(portfolio_handlers::handle_analyze),
        )
        .route(
            "/api/v1/portfolios/:handle/view",
            post(portfolio_handlers::handle_assemble_view),
        )
        // Standalone analysis operations
        .route(
            "/api/v1/skills/suggest",
            post(analysis_handlers::handle_suggest_skills),
        )
        .route(
            "/api/v1/articles/summarize",
            post(analysis_handlers::handle_summarize_article),
        )
        // Resume upload
        .route("/api/v1/resume/extract", post(resume::handle_extract_resume))
        // Visitor counter
        .route(
            "/api/v1/portfolios/:handle/views",
            get(visitors::handle_get_views),
        )
        .route(
            "/api/v1/portfolios/:handle/visit",
            post(visitors::handle_record_visit),
        )
        .with_state(state)
}
