#![allow(dead_code)]

//! User-entered articles and external projects. Both are addressed by
//! client-generated ids; the article summary is populated asynchronously
//! after creation, with a placeholder while pending and a fixed fallback
//! string on failure.

use serde::{Deserialize, Serialize};

/// Shown from article creation until the summarization call resolves.
pub const SUMMARY_PENDING: &str = "Generating summary...";
/// Shown when summarization fails; localized to the one article, other
/// articles keep their own state.
pub const SUMMARY_FAILED: &str = "Could not generate summary.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub content: String,
    pub summary: String,
}

impl Article {
    /// A freshly added article starts with the pending placeholder.
    pub fn new(id: String, title: String, url: String, content: String) -> Self {
        Self {
            id,
            title,
            url,
            content,
            summary: SUMMARY_PENDING.to_string(),
        }
    }

    pub fn resolve_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    pub fn fail_summary(&mut self) {
        self.summary = SUMMARY_FAILED.to_string();
    }

    pub fn summary_is_pending(&self) -> bool {
        self.summary == SUMMARY_PENDING
    }
}

/// A project hosted outside GitHub, carried through assembly untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn make_article() -> Article {
        Article::new(
            Uuid::new_v4().to_string(),
            "Why Rust".to_string(),
            "https://example.com/why-rust".to_string(),
            "A long article body.".to_string(),
        )
    }

    #[test]
    fn test_new_article_starts_pending() {
        let article = make_article();
        assert!(article.summary_is_pending());
        assert_eq!(article.summary, SUMMARY_PENDING);
    }

    #[test]
    fn test_resolve_summary_replaces_placeholder() {
        let mut article = make_article();
        article.resolve_summary("Three sentences about Rust.".to_string());
        assert!(!article.summary_is_pending());
        assert_eq!(article.summary, "Three sentences about Rust.");
    }

    #[test]
    fn test_failed_summary_uses_fallback_string() {
        let mut article = make_article();
        article.fail_summary();
        assert_eq!(article.summary, SUMMARY_FAILED);
    }

    #[test]
    fn test_failure_is_localized_to_one_article() {
        let mut failing = make_article();
        let mut fine = make_article();
        failing.fail_summary();
        fine.resolve_summary("All good.".to_string());

        assert_eq!(failing.summary, SUMMARY_FAILED);
        assert_eq!(fine.summary, "All good.");
    }
}
