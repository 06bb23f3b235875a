//! Axum route handlers for the portfolio API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::run_profile_analysis;
use crate::analysis::types::ProfileAnalysisOutput;
use crate::errors::AppError;
use crate::github::cache::fetch_profile_cached;
use crate::github::languages::{compute_language_histogram, LanguageCount};
use crate::github::models::{GithubProfile, GithubRepo};
use crate::portfolio::projects::{rank_projects, DisplayRepo};
use crate::portfolio::view::{assemble, ClientState, PortfolioViewModel};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub profile: GithubProfile,
    pub repos: Vec<GithubRepo>,
    pub language_histogram: Vec<LanguageCount>,
    pub ranked_projects: Vec<DisplayRepo>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub preview: Option<bool>,
}

fn validated_handle(handle: &str) -> Result<&str, AppError> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(AppError::Validation("handle cannot be empty".to_string()));
    }
    Ok(handle)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/portfolios/:handle
///
/// Profile, owned repositories, language histogram, and star-ranked projects.
/// No AI data — the client requests analysis separately so the page renders
/// immediately and each section degrades on its own.
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let handle = validated_handle(&handle)?;

    let (profile, repos) = fetch_profile_cached(&state.github, &state.redis, handle).await?;

    let language_histogram = compute_language_histogram(&repos);
    let ranked_projects = rank_projects(&repos, None);

    Ok(Json(PortfolioResponse {
        profile,
        repos,
        language_histogram,
        ranked_projects,
    }))
}

/// POST /api/v1/portfolios/:handle/analyze
///
/// Runs profile analysis over the (cached) GitHub data, optionally enhanced
/// with resume text. Career extraction comes exclusively from the resume
/// when one is supplied.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ProfileAnalysisOutput>, AppError> {
    let handle = validated_handle(&handle)?;

    let (profile, repos) = fetch_profile_cached(&state.github, &state.redis, handle).await?;

    let output =
        run_profile_analysis(state.gateway.as_ref(), &profile, &repos, request.resume_text)
            .await?;

    Ok(Json(output))
}

/// POST /api/v1/portfolios/:handle/view?preview=
///
/// Assembles the full view model from fresh GitHub data plus the client-held
/// state in the request body. Preview mode omits empty optional sections.
pub async fn handle_assemble_view(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<PreviewQuery>,
    Json(client_state): Json<ClientState>,
) -> Result<Json<PortfolioViewModel>, AppError> {
    let handle = validated_handle(&handle)?;

    let (profile, repos) = fetch_profile_cached(&state.github, &state.redis, handle).await?;

    let preview = query.preview.unwrap_or(false);
    let view = assemble(profile, &repos, &client_state, preview);

    Ok(Json(view))
}
