//! Language histogram — classifies repository primary languages into a
//! ranked `{name, count}` list for the portfolio's "Top Languages" section.

use serde::{Deserialize, Serialize};

use crate::github::models::GithubRepo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: u32,
}

/// Tallies the `language` field across repositories into a histogram sorted
/// descending by count. Repositories with no detected language are skipped.
/// Ties keep first-seen order from the input sequence (the repo list arrives
/// most-recently-pushed first, so ties favor recently active languages).
pub fn compute_language_histogram(repos: &[GithubRepo]) -> Vec<LanguageCount> {
    let mut histogram: Vec<LanguageCount> = Vec::new();

    for repo in repos {
        let Some(language) = repo.language.as_deref() else {
            continue;
        };
        match histogram.iter_mut().find(|l| l.name == language) {
            Some(entry) => entry.count += 1,
            None => histogram.push(LanguageCount {
                name: language.to_string(),
                count: 1,
            }),
        }
    }

    // Vec::sort_by is stable, so equal counts retain insertion order.
    histogram.sort_by(|a, b| b.count.cmp(&a.count));
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::test_fixtures::make_repo;

    #[test]
    fn test_empty_input_yields_empty_histogram() {
        assert!(compute_language_histogram(&[]).is_empty());
    }

    #[test]
    fn test_null_language_repos_are_skipped() {
        let repos = vec![
            make_repo("a", "octocat", false, 0, Some("Rust")),
            make_repo("b", "octocat", false, 0, None),
            make_repo("c", "octocat", false, 0, Some("Rust")),
        ];
        let histogram = compute_language_histogram(&repos);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[0].name, "Rust");
        assert_eq!(histogram[0].count, 2);
    }

    #[test]
    fn test_counts_sum_to_repos_with_language() {
        let repos = vec![
            make_repo("a", "octocat", false, 0, Some("Rust")),
            make_repo("b", "octocat", false, 0, Some("Go")),
            make_repo("c", "octocat", false, 0, None),
            make_repo("d", "octocat", false, 0, Some("Go")),
        ];
        let histogram = compute_language_histogram(&repos);
        let total: u32 = histogram.iter().map(|l| l.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_sorted_non_increasing_by_count() {
        let repos = vec![
            make_repo("a", "octocat", false, 0, Some("Go")),
            make_repo("b", "octocat", false, 0, Some("Rust")),
            make_repo("c", "octocat", false, 0, Some("Rust")),
            make_repo("d", "octocat", false, 0, Some("Rust")),
            make_repo("e", "octocat", false, 0, Some("Go")),
            make_repo("f", "octocat", false, 0, Some("Python")),
        ];
        let histogram = compute_language_histogram(&repos);
        for pair in histogram.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(histogram[0].name, "Rust");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let repos = vec![
            make_repo("a", "octocat", false, 0, Some("TypeScript")),
            make_repo("b", "octocat", false, 0, Some("Python")),
            make_repo("c", "octocat", false, 0, Some("TypeScript")),
            make_repo("d", "octocat", false, 0, Some("Python")),
        ];
        let histogram = compute_language_histogram(&repos);
        assert_eq!(histogram[0].name, "TypeScript");
        assert_eq!(histogram[1].name, "Python");
    }
}
