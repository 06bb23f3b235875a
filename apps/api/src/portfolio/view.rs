//! View-model assembly — the deterministic merge of GitHub data, analysis
//! output, and client-held state into the structure the page renders.
//! Rebuilt on every request, never cached.

use serde::{Deserialize, Serialize};

use crate::analysis::types::ProfileAnalysisOutput;
use crate::github::languages::{compute_language_histogram, LanguageCount};
use crate::github::models::{GithubProfile, GithubRepo};
use crate::portfolio::articles::{Article, ExternalProject};
use crate::portfolio::journey::{merge_timeline, JourneyEntry};
use crate::portfolio::projects::{rank_projects, DisplayRepo};

/// Client-held portfolio state, sent with each assembly request. Manual
/// entries, skills, articles, and external projects live in the client;
/// the server owns only their merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientState {
    #[serde(default)]
    pub analysis: Option<ProfileAnalysisOutput>,
    #[serde(default)]
    pub manual_entries: Vec<JourneyEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub external_projects: Vec<ExternalProject>,
    /// A display string from a previous failed analysis call, carried so the
    /// rest of the page can render around it.
    #[serde(default)]
    pub analysis_error: Option<String>,
}

/// The assembled view model. In preview mode, empty optional sections are
/// omitted (`None`) rather than rendered as empty lists.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioViewModel {
    pub profile: GithubProfile,
    pub language_histogram: Vec<LanguageCount>,
    pub ranked_projects: Vec<DisplayRepo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_timeline: Option<Vec<JourneyEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_projects: Option<Vec<ExternalProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

/// Hides a section in preview mode when it has nothing to show.
fn section<T>(items: Vec<T>, preview: bool) -> Option<Vec<T>> {
    if preview && items.is_empty() {
        None
    } else {
        Some(items)
    }
}

pub fn assemble(
    profile: GithubProfile,
    repos: &[GithubRepo],
    state: &ClientState,
    preview: bool,
) -> PortfolioViewModel {
    let language_histogram = compute_language_histogram(repos);

    let (summary, timeline, project_summaries) = match &state.analysis {
        Some(analysis) => (
            Some(analysis.summary.clone()),
            merge_timeline(
                &analysis.work_experience,
                &analysis.education,
                &state.manual_entries,
            ),
            Some(&analysis.project_summaries),
        ),
        None => (None, merge_timeline(&[], &[], &state.manual_entries), None),
    };

    let ranked_projects = rank_projects(repos, project_summaries);

    PortfolioViewModel {
        profile,
        language_histogram,
        ranked_projects,
        summary,
        merged_timeline: section(timeline, preview),
        skills: section(state.skills.clone(), preview),
        articles: section(state.articles.clone(), preview),
        external_projects: section(state.external_projects.clone(), preview),
        analysis_error: state.analysis_error.clone(),
    }
}
