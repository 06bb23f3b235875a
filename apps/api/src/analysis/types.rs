//! Typed contracts for the three analysis operations. The model is prompted
//! to emit these shapes verbatim; deserialization is the schema check.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hard cap on AI-suggested skills. Enforced here, at the gateway — the
/// downstream skill merge never re-truncates.
pub const MAX_SUGGESTED_SKILLS: usize = 15;

/// A work-experience entry extracted by profile analysis.
/// Dates are `"<Month> <Year>"` strings; an open-ended role ends with the
/// literal `"Present"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An education entry extracted by profile analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub organization: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysisInput {
    pub handle: String,
    /// The owned repository list, serialized as JSON.
    pub repository_data: String,
    pub bio: Option<String>,
    /// When present and non-empty, career extraction comes exclusively from
    /// this text; repository data is ignored for that sub-task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
}

impl ProfileAnalysisInput {
    /// Whether the resume branch of the prompt applies.
    pub fn has_resume(&self) -> bool {
        self.resume_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysisOutput {
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<EducationEntry>,
    /// Repo name → generated one-sentence summary, only for repositories
    /// whose existing description is missing or too short.
    #[serde(default)]
    pub project_summaries: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestionInput {
    pub repository_data: String,
    pub summary: Option<String>,
    /// The merged work/education history, serialized as JSON.
    pub career_journey: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestionOutput {
    pub skills: Vec<String>,
}

impl SkillSuggestionOutput {
    /// De-duplicates (exact match, first occurrence wins) and truncates to
    /// [`MAX_SUGGESTED_SKILLS`]. The prompt asks for both, but model output
    /// is not trusted to comply.
    pub fn normalized(self) -> Self {
        let mut seen: Vec<String> = Vec::new();
        for skill in self.skills {
            if !skill.trim().is_empty() && !seen.contains(&skill) {
                seen.push(skill);
            }
            if seen.len() == MAX_SUGGESTED_SKILLS {
                break;
            }
        }
        Self { skills: seen }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_deduplicates_exact_matches() {
        let output = SkillSuggestionOutput {
            skills: vec![
                "Docker".to_string(),
                "Figma".to_string(),
                "Docker".to_string(),
            ],
        };
        assert_eq!(output.normalized().skills, vec!["Docker", "Figma"]);
    }

    #[test]
    fn test_normalized_caps_at_fifteen() {
        let output = SkillSuggestionOutput {
            skills: (0..30).map(|i| format!("skill-{i}")).collect(),
        };
        assert_eq!(output.normalized().skills.len(), MAX_SUGGESTED_SKILLS);
    }

    #[test]
    fn test_normalized_drops_blank_entries() {
        let output = SkillSuggestionOutput {
            skills: vec!["".to_string(), "  ".to_string(), "Agile".to_string()],
        };
        assert_eq!(output.normalized().skills, vec!["Agile"]);
    }

    #[test]
    fn test_normalized_is_case_sensitive() {
        // Exact-match semantics are deliberate; "docker" and "Docker" are
        // distinct labels.
        let output = SkillSuggestionOutput {
            skills: vec!["Docker".to_string(), "docker".to_string()],
        };
        assert_eq!(output.normalized().skills.len(), 2);
    }

    #[test]
    fn test_has_resume_requires_non_blank_text() {
        let mut input = ProfileAnalysisInput {
            handle: "octocat".to_string(),
            repository_data: "[]".to_string(),
            bio: None,
            resume_text: None,
        };
        assert!(!input.has_resume());

        input.resume_text = Some("   ".to_string());
        assert!(!input.has_resume());

        input.resume_text = Some("Engineer at Initech".to_string());
        assert!(input.has_resume());
    }

    #[test]
    fn test_profile_output_deserializes_camel_case_wire_shape() {
        let json = r#"{
            "summary": "A systems engineer.",
            "workExperience": [
                {
                    "organization": "Initech",
                    "role": "Engineer",
                    "startDate": "August 2021",
                    "endDate": "Present"
                }
            ],
            "education": [],
            "projectSummaries": {"gitfolio": "A portfolio generator."}
        }"#;

        let output: ProfileAnalysisOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.work_experience.len(), 1);
        assert_eq!(output.work_experience[0].end_date, "Present");
        assert_eq!(
            output.project_summaries.get("gitfolio").map(String::as_str),
            Some("A portfolio generator.")
        );
    }

    #[test]
    fn test_project_summaries_defaults_to_empty_when_absent() {
        let json = r#"{"summary": "s", "workExperience": [], "education": []}"#;
        let output: ProfileAnalysisOutput = serde_json::from_str(json).unwrap();
        assert!(output.project_summaries.is_empty());
    }
}
