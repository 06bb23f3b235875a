//! Redis cache for GitHub responses. Profiles change slowly; a one-hour TTL
//! keeps the portfolio page inside the unauthenticated rate limit.
//!
//! Cache failures are never surfaced — a miss or a broken connection just
//! degrades to a direct fetch.

use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::models::{GithubProfile, GithubRepo};
use crate::github::{GithubClient, GithubError};

const CACHE_TTL_SECONDS: u64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
struct CachedProfile {
    profile: GithubProfile,
    repos: Vec<GithubRepo>,
}

fn cache_key(handle: &str) -> String {
    format!("gitfolio:profile:{handle}")
}

/// Fetches `(profile, repos)` for `handle`, consulting the cache first and
/// writing back on a miss.
pub async fn fetch_profile_cached(
    github: &GithubClient,
    redis: &redis::Client,
    handle: &str,
) -> Result<(GithubProfile, Vec<GithubRepo>), GithubError> {
    if let Some(cached) = read_cache(redis, handle).await {
        return Ok((cached.profile, cached.repos));
    }

    let (profile, repos) = github.fetch_profile(handle).await?;

    write_cache(redis, handle, &profile, &repos).await;
    Ok((profile, repos))
}

async fn read_cache(redis: &redis::Client, handle: &str) -> Option<CachedProfile> {
    let mut conn = match redis.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Redis unavailable, skipping profile cache: {e}");
            return None;
        }
    };

    let raw: Option<String> = conn.get(cache_key(handle)).await.ok().flatten();
    raw.and_then(|json| serde_json::from_str(&json).ok())
}

async fn write_cache(
    redis: &redis::Client,
    handle: &str,
    profile: &GithubProfile,
    repos: &[GithubRepo],
) {
    let entry = CachedProfile {
        profile: profile.clone(),
        repos: repos.to_vec(),
    };

    let Ok(json) = serde_json::to_string(&entry) else {
        return;
    };

    let mut conn = match redis.get_multiplexed_async_connection().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Redis unavailable, profile not cached: {e}");
            return;
        }
    };

    if let Err(e) = conn
        .set_ex::<_, _, ()>(cache_key(handle), json, CACHE_TTL_SECONDS)
        .await
    {
        warn!("Failed to cache GitHub profile for {handle}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_namespaced_per_handle() {
        assert_eq!(cache_key("octocat"), "gitfolio:profile:octocat");
        assert_ne!(cache_key("octocat"), cache_key("torvalds"));
    }
}
