//! AI Analysis Gateway — three independent, stateless prompt operations:
//! profile analysis (summary + career extraction + per-repo summaries),
//! skill suggestion, and article summarization.
//!
//! The operations share no mutable state and are independently invocable; a
//! failure in one never blocks or corrupts the others. There is no automatic
//! retry — failures are classified and handed back so the client can offer a
//! manual retry control.

use async_trait::async_trait;
use thiserror::Error;

pub mod handlers;
pub mod prompts;
pub mod types;

use crate::github::models::{GithubProfile, GithubRepo};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

use self::types::{
    ArticleSummary, ProfileAnalysisInput, ProfileAnalysisOutput, SkillSuggestionInput,
    SkillSuggestionOutput,
};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("The AI service is temporarily overloaded")]
    Overloaded,

    #[error("Analysis failed: {0}")]
    Unknown(String),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            // 429 rate limit, 503 unavailable, 529 overloaded — all read as
            // "the service is saturated, try again shortly".
            LlmError::Api {
                status: 429 | 503 | 529,
                ..
            } => AnalysisError::Overloaded,
            other => AnalysisError::Unknown(other.to_string()),
        }
    }
}

/// The gateway seam. Handlers depend on this trait, not on the LLM client,
/// so tests can substitute a recording stub.
///
/// Carried in `AppState` as `Arc<dyn AnalysisGateway>`.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze_profile(
        &self,
        input: ProfileAnalysisInput,
    ) -> Result<ProfileAnalysisOutput, AnalysisError>;

    async fn generate_skills(
        &self,
        input: SkillSuggestionInput,
    ) -> Result<SkillSuggestionOutput, AnalysisError>;

    async fn summarize_article(&self, content: &str) -> Result<ArticleSummary, AnalysisError>;
}

/// Production gateway backed by the shared [`LlmClient`].
pub struct LlmAnalysisGateway {
    llm: LlmClient,
}

impl LlmAnalysisGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnalysisGateway for LlmAnalysisGateway {
    async fn analyze_profile(
        &self,
        input: ProfileAnalysisInput,
    ) -> Result<ProfileAnalysisOutput, AnalysisError> {
        let prompt = prompts::build_profile_prompt(&input);
        let output = self
            .llm
            .call_json::<ProfileAnalysisOutput>(&prompt, JSON_ONLY_SYSTEM)
            .await?;
        Ok(output)
    }

    async fn generate_skills(
        &self,
        input: SkillSuggestionInput,
    ) -> Result<SkillSuggestionOutput, AnalysisError> {
        let prompt = prompts::build_skill_prompt(&input);
        let output = self
            .llm
            .call_json::<SkillSuggestionOutput>(&prompt, JSON_ONLY_SYSTEM)
            .await?;
        // The cap and dedup live here; merging further downstream never
        // re-truncates.
        Ok(output.normalized())
    }

    async fn summarize_article(&self, content: &str) -> Result<ArticleSummary, AnalysisError> {
        let prompt = prompts::build_article_prompt(content);
        let output = self
            .llm
            .call_json::<ArticleSummary>(&prompt, JSON_ONLY_SYSTEM)
            .await?;
        Ok(output)
    }
}

/// Builds the profile-analysis input from fetched GitHub data and invokes the
/// gateway. The repository payload is the owned repo list serialized as JSON,
/// exactly what the ranking and histogram already consumed.
pub async fn run_profile_analysis(
    gateway: &dyn AnalysisGateway,
    profile: &GithubProfile,
    repos: &[GithubRepo],
    resume_text: Option<String>,
) -> Result<ProfileAnalysisOutput, AnalysisError> {
    let repository_data = serde_json::to_string(repos)
        .map_err(|e| AnalysisError::Unknown(format!("failed to serialize repositories: {e}")))?;

    gateway
        .analyze_profile(ProfileAnalysisInput {
            handle: profile.login.clone(),
            repository_data,
            bio: profile.bio.clone(),
            resume_text,
        })
        .await
}


#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::test_stub::StubGateway;
    use super::*;
    use crate::github::test_fixtures::make_repo;

    fn make_profile(handle: &str, bio: Option<&str>) -> GithubProfile {
        GithubProfile {
            login: handle.to_string(),
            id: 583231,
            avatar_url: format!("https://avatars.githubusercontent.com/{handle}"),
            html_url: format!("https://github.com/{handle}"),
            name: Some("The Octocat".to_string()),
            company: None,
            blog: None,
            location: Some("San Francisco".to_string()),
            email: None,
            bio: bio.map(String::from),
            twitter_username: None,
            public_repos: 8,
            public_gists: 8,
            followers: 100,
            following: 9,
            created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
        }
    }

    #[test]
    fn test_rate_limit_and_unavailable_classify_as_overloaded() {
        for status in [429u16, 503, 529] {
            let err = AnalysisError::from(LlmError::Api {
                status,
                message: "busy".to_string(),
            });
            assert!(matches!(err, AnalysisError::Overloaded), "status {status}");
        }
    }

    #[test]
    fn test_other_api_errors_classify_as_unknown() {
        let err = AnalysisError::from(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(matches!(err, AnalysisError::Unknown(_)));

        let err = AnalysisError::from(LlmError::EmptyContent);
        assert!(matches!(err, AnalysisError::Unknown(_)));
    }

    #[tokio::test]
    async fn test_run_profile_analysis_passes_resume_through() {
        let stub = StubGateway::default();
        let profile = make_profile("octocat", Some("Builds things."));
        let repos = vec![make_repo("gitfolio", "octocat", false, 4, Some("Rust"))];

        run_profile_analysis(
            &stub,
            &profile,
            &repos,
            Some("Engineer at Initech".to_string()),
        )
        .await
        .unwrap();

        let inputs = stub.profile_inputs.lock().unwrap();
        assert_eq!(inputs.len(), 1);
        assert!(inputs[0].has_resume());
        assert_eq!(
            inputs[0].resume_text.as_deref(),
            Some("Engineer at Initech")
        );
        assert!(inputs[0].repository_data.contains("gitfolio"));
        assert_eq!(inputs[0].bio.as_deref(), Some("Builds things."));
    }

    #[tokio::test]
    async fn test_run_profile_analysis_without_resume_requests_github_branch() {
        let stub = StubGateway::default();
        let profile = make_profile("octocat", None);
        let repos = vec![];

        run_profile_analysis(&stub, &profile, &repos, None)
            .await
            .unwrap();

        let inputs = stub.profile_inputs.lock().unwrap();
        assert!(!inputs[0].has_resume());
        // The prompt built from this input must not contain a resume block.
        let prompt = prompts::build_profile_prompt(&inputs[0]);
        assert!(!prompt.contains("Resume Text:"));
    }
}
