#![allow(dead_code)]

//! Skill Set Manager — a unique, order-preserving collection of skill
//! labels. Matching is exact string equality; no case folding or fuzzy
//! matching (a deliberate simplicity trade-off).

use serde::{Deserialize, Serialize};

/// Returns `existing ++ (generated \ existing)`: existing order preserved,
/// only genuinely new labels appended. Never truncates — the AI cap is
/// enforced at the gateway.
pub fn merge_generated(existing: &[String], generated: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for label in generated {
        if !merged.contains(label) {
            merged.push(label.clone());
        }
    }
    merged
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    labels: Vec<String>,
}

impl SkillSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Appends a label; no-op when blank or already present.
    pub fn add(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() || self.labels.iter().any(|l| l == label) {
            return;
        }
        self.labels.push(label.to_string());
    }

    pub fn remove(&mut self, label: &str) {
        self.labels.retain(|l| l != label);
    }

    /// Folds AI-suggested labels in without disturbing existing order.
    pub fn extend_generated(&mut self, generated: &[String]) {
        self.labels = merge_generated(&self.labels, generated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_generated_never_duplicates() {
        let merged = merge_generated(&labels(&["Docker"]), &labels(&["Docker", "Figma"]));
        assert_eq!(merged, labels(&["Docker", "Figma"]));
    }

    #[test]
    fn test_merge_generated_preserves_existing_order() {
        let merged = merge_generated(
            &labels(&["Kubernetes", "Agile"]),
            &labels(&["Agile", "Terraform", "Kubernetes"]),
        );
        assert_eq!(merged, labels(&["Kubernetes", "Agile", "Terraform"]));
    }

    #[test]
    fn test_merge_generated_with_empty_existing() {
        let merged = merge_generated(&[], &labels(&["Figma"]));
        assert_eq!(merged, labels(&["Figma"]));
    }

    #[test]
    fn test_add_ignores_blank_labels() {
        let mut skills = SkillSet::default();
        skills.add("");
        skills.add("   ");
        assert!(skills.labels().is_empty());
    }

    #[test]
    fn test_add_ignores_exact_duplicates() {
        let mut skills = SkillSet::default();
        skills.add("Docker");
        skills.add("Docker");
        assert_eq!(skills.labels(), labels(&["Docker"]).as_slice());
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut skills = SkillSet::default();
        skills.add("Docker");
        skills.add("docker");
        assert_eq!(skills.labels().len(), 2);
    }

    #[test]
    fn test_remove_deletes_matching_label() {
        let mut skills = SkillSet::new(labels(&["Docker", "Figma"]));
        skills.remove("Docker");
        assert_eq!(skills.labels(), labels(&["Figma"]).as_slice());
    }

    #[test]
    fn test_extend_generated_appends_only_new() {
        let mut skills = SkillSet::new(labels(&["Docker"]));
        skills.extend_generated(&labels(&["Docker", "Figma", "Agile"]));
        assert_eq!(skills.labels(), labels(&["Docker", "Figma", "Agile"]).as_slice());
    }
}
