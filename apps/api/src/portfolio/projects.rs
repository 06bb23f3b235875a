//! Project Ranking & Summary Fallback — ranks repositories by stars, keeps a
//! bounded top slice, and fills missing descriptions from AI-generated
//! per-repository summaries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::github::models::GithubRepo;

pub const MAX_RANKED_PROJECTS: usize = 6;
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// A repository shaped for the "Top Projects" section, with the description
/// already resolved through the fallback chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRepo {
    pub name: String,
    pub html_url: String,
    pub description: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
}

/// Sorts repositories descending by star count (stable, so ties keep the
/// adapter's most-recently-pushed order), takes the top six, and resolves
/// each description by precedence: the repo's own description if non-empty,
/// else the AI summary for that repo name, else a fixed placeholder.
pub fn rank_projects(
    repos: &[GithubRepo],
    project_summaries: Option<&HashMap<String, String>>,
) -> Vec<DisplayRepo> {
    let mut ranked: Vec<&GithubRepo> = repos.iter().collect();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    ranked
        .into_iter()
        .take(MAX_RANKED_PROJECTS)
        .map(|repo| DisplayRepo {
            name: repo.name.clone(),
            html_url: repo.html_url.clone(),
            description: resolve_description(repo, project_summaries),
            language: repo.language.clone(),
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
        })
        .collect()
}

fn resolve_description(
    repo: &GithubRepo,
    project_summaries: Option<&HashMap<String, String>>,
) -> String {
    if let Some(description) = repo.description.as_deref() {
        if !description.trim().is_empty() {
            return description.to_string();
        }
    }

    project_summaries
        .and_then(|summaries| summaries.get(&repo.name))
        .cloned()
        .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string())
}
