//! GitHub Data Adapter — fetches a user profile and up to 100 repositories,
//! then filters to non-fork repositories owned by the queried handle.
//!
//! No retries are performed here; the caller decides what a failure means.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub mod cache;
pub mod languages;
pub mod models;

use models::{GithubProfile, GithubRepo};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("gitfolio-api/", env!("CARGO_PKG_VERSION"));
/// Repository list page size. One page is enough: ranking and the histogram
/// only ever look at the 100 most-recently-pushed repositories.
const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub user \"{0}\" not found")]
    NotFound(String),

    #[error("GitHub API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error body GitHub returns on non-success statuses.
#[derive(Debug, Deserialize)]
struct GithubApiError {
    message: String,
}

/// Thin client over the GitHub REST API. Holds an optional bearer token;
/// unauthenticated mode works but is subject to much lower rate limits.
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            token,
        }
    }

    /// Fetches the profile and repository list for `handle` concurrently and
    /// returns the profile plus only the repositories the user owns outright.
    pub async fn fetch_profile(
        &self,
        handle: &str,
    ) -> Result<(GithubProfile, Vec<GithubRepo>), GithubError> {
        let profile_path = format!("/users/{handle}");
        let repos_path =
            format!("/users/{handle}/repos?per_page={REPOS_PER_PAGE}&sort=pushed");

        // Independent reads; both must complete before the adapter returns.
        let (profile, repos) = tokio::try_join!(
            self.get_json::<GithubProfile>(handle, &profile_path),
            self.get_json::<Vec<GithubRepo>>(handle, &repos_path),
        )?;

        let owned = retain_owned(repos, handle);
        debug!(handle, owned = owned.len(), "fetched GitHub profile");

        Ok((profile, owned))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        handle: &str,
        path: &str,
    ) -> Result<T, GithubError> {
        let mut request = self
            .http
            .get(format!("{GITHUB_API_URL}{path}"))
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header("User-Agent", USER_AGENT);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound(handle.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GithubApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GithubError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Retains repository `r` iff `!r.fork && r.owner.login == handle`. The API
/// can include org forks or entries under a renamed owner; neither belongs in
/// the ranking or the histogram.
pub fn retain_owned(repos: Vec<GithubRepo>, handle: &str) -> Vec<GithubRepo> {
    repos
        .into_iter()
        .filter(|r| !r.fork && r.owner.login == handle)
        .collect()
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::{TimeZone, Utc};

    use super::models::{GithubRepo, RepoOwner};

    pub fn make_repo(
        name: &str,
        owner: &str,
        fork: bool,
        stars: u32,
        language: Option<&str>,
    ) -> GithubRepo {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        GithubRepo {
            id: 1,
            name: name.to_string(),
            full_name: format!("{owner}/{name}"),
            html_url: format!("https://github.com/{owner}/{name}"),
            description: None,
            fork,
            created_at: timestamp,
            updated_at: timestamp,
            pushed_at: timestamp,
            stargazers_count: stars,
            watchers_count: stars,
            forks_count: 0,
            open_issues_count: 0,
            language: language.map(String::from),
            license: None,
            owner: RepoOwner {
                login: owner.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::make_repo;
    use super::*;

    #[test]
    fn test_retain_owned_drops_forks() {
        let repos = vec![
            make_repo("kept", "octocat", false, 0, None),
            make_repo("forked", "octocat", true, 0, None),
        ];
        let owned = retain_owned(repos, "octocat");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "kept");
    }

    #[test]
    fn test_retain_owned_drops_other_owners() {
        let repos = vec![
            make_repo("mine", "octocat", false, 0, None),
            make_repo("org-repo", "some-org", false, 0, None),
        ];
        let owned = retain_owned(repos, "octocat");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "mine");
    }

    #[test]
    fn test_retain_owned_never_returns_fork_or_foreign_repo() {
        let repos = vec![
            make_repo("a", "octocat", false, 3, None),
            make_repo("b", "octocat", true, 9, None),
            make_repo("c", "other", false, 2, None),
            make_repo("d", "octocat", false, 1, None),
        ];
        let owned = retain_owned(repos, "octocat");
        assert!(owned.iter().all(|r| !r.fork && r.owner.login == "octocat"));
    }

    // Eight repos come back for "octocat", two of them forks — six survive.
    #[test]
    fn test_octocat_scenario_eight_repos_two_forks() {
        let mut repos: Vec<_> = (0..6)
            .map(|i| make_repo(&format!("repo-{i}"), "octocat", false, i, None))
            .collect();
        repos.push(make_repo("fork-1", "octocat", true, 0, None));
        repos.push(make_repo("fork-2", "octocat", true, 0, None));

        let owned = retain_owned(repos, "octocat");
        assert_eq!(owned.len(), 6);
    }
}
