//! Axum route handlers for the standalone analysis operations (skill
//! suggestion and article summarization). Profile analysis lives with the
//! portfolio handlers since it needs the GitHub fetch.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::types::{ArticleSummary, SkillSuggestionInput};
use crate::errors::AppError;
use crate::portfolio::skills::merge_generated;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    /// Skills the user already has; suggestions are folded in after these,
    /// duplicates dropped.
    #[serde(default)]
    pub existing: Vec<String>,
    #[serde(flatten)]
    pub input: SkillSuggestionInput,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    /// The merged list: existing labels first, then genuinely new
    /// suggestions.
    pub skills: Vec<String>,
    pub suggested: usize,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeArticleRequest {
    pub content: String,
}

/// POST /api/v1/skills/suggest
///
/// Suggests up to 15 de-duplicated skills from repository data, the
/// professional summary, and the career journey, then merges them into the
/// caller's existing set. Bare language names are excluded — the language
/// histogram surfaces those separately.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if request.input.repository_data.trim().is_empty() {
        return Err(AppError::Validation(
            "repository_data cannot be empty".to_string(),
        ));
    }

    let generated = state.gateway.generate_skills(request.input).await?;
    let merged = merge_generated(&request.existing, &generated.skills);
    let suggested = merged.len() - request.existing.len();

    Ok(Json(SuggestSkillsResponse {
        skills: merged,
        suggested,
    }))
}

/// POST /api/v1/articles/summarize
///
/// Produces a three-sentence technical summary of an article. Failures are
/// reported as summarization errors so the client can fall back on the
/// per-article error string without touching other articles.
pub async fn handle_summarize_article(
    State(state): State<AppState>,
    Json(request): Json<SummarizeArticleRequest>,
) -> Result<Json<ArticleSummary>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let summary = state
        .gateway
        .summarize_article(&request.content)
        .await
        .map_err(|e| AppError::Summarization(e.to_string()))?;

    Ok(Json(summary))
}
