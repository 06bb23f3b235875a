//! Prompt builders for the three analysis operations. All three share the
//! JSON-only system prompt; the operation persona lives in the prompt body.

use crate::analysis::types::{ProfileAnalysisInput, SkillSuggestionInput};

const PROFILE_ANALYSIS_HEADER: &str = r#"You are an expert AI assistant analyzing a developer's professional information to create a portfolio.

From the provided GitHub data and optional resume text, perform three tasks:

1. Generate a Professional Summary: a concise summary highlighting the developer's key skills, expertise, and notable patterns.
2. Extract Career Journey: identify work experience and education.
   - Look for company names, job titles, and employment dates.
   - Look for institution names, degrees, and attendance dates.
   - Format dates as "<Month> <Year>" (e.g., "August 2021"). For current roles, use "Present" as the end date.
   - If no career data can be found, return empty arrays. Do NOT invent information.
3. Generate Project Summaries: for repositories in the data whose description is missing or very short, generate a concise, engaging one-sentence summary from the name, language, and any available context.
   - Return a map keyed by repository name.
   - Only include repositories that need a better description. NEVER replace an adequate existing description.

Return a single JSON object with this EXACT schema (no extra fields):
{
  "summary": "...",
  "workExperience": [
    {"organization": "...", "role": "...", "startDate": "August 2021", "endDate": "Present", "description": "..."}
  ],
  "education": [
    {"organization": "...", "degree": "...", "startDate": "August 2017", "endDate": "May 2021", "description": "..."}
  ],
  "projectSummaries": {"repo-name": "One-sentence summary."}
}"#;

/// Source-precedence rule injected only when resume text is supplied.
const RESUME_PRECEDENCE_INSTRUCTION: &str = "\
A resume is provided below. Extract the career journey (work experience and \
education) EXCLUSIVELY from the resume text; ignore the repository data for \
that task. For the professional summary, blend both sources but prioritize \
the resume text for factual claims.";

/// Source rule when no resume is available.
const GITHUB_ONLY_INSTRUCTION: &str = "\
No resume is available. Derive the career journey and summary from the \
GitHub data alone.";

/// Builds the profile-analysis prompt. The resume block and its exclusivity
/// rule appear only when the input carries non-blank resume text.
pub fn build_profile_prompt(input: &ProfileAnalysisInput) -> String {
    let mut prompt = String::from(PROFILE_ANALYSIS_HEADER);

    prompt.push_str("\n\n");
    if input.has_resume() {
        prompt.push_str(RESUME_PRECEDENCE_INSTRUCTION);
    } else {
        prompt.push_str(GITHUB_ONLY_INSTRUCTION);
    }

    prompt.push_str(&format!(
        "\n\nGitHub Username: {}\nBio: {}\nRepository Data:\n{}",
        input.handle,
        input.bio.as_deref().unwrap_or("(none)"),
        input.repository_data,
    ));

    if input.has_resume() {
        prompt.push_str(&format!(
            "\n\nResume Text:\n{}",
            input.resume_text.as_deref().unwrap_or_default()
        ));
    }

    prompt
}

const SKILL_SUGGESTION_TEMPLATE: &str = r#"You are an expert career coach and tech recruiter. Analyze the following developer portfolio information: GitHub repositories, a professional summary, and career history.

Identify and extract a list of relevant skills:
- Technical skills: frameworks, libraries, databases, cloud services, and other tools.
- Methodologies: Agile, Scrum, DevOps, TDD, and similar.
- Soft skills: leadership, communication, project management, teamwork.

Do NOT include bare programming language names (e.g., "TypeScript", "Python") — those are displayed separately. Focus on frameworks, tools, and other professional skills.

Return a unique list of at most 15 skills as a JSON object: {"skills": ["..."]}

Repository Data:
{repository_data}

Professional Summary:
{summary}

Career Journey:
{career_journey}"#;

pub fn build_skill_prompt(input: &SkillSuggestionInput) -> String {
    SKILL_SUGGESTION_TEMPLATE
        .replace("{repository_data}", &input.repository_data)
        .replace("{summary}", input.summary.as_deref().unwrap_or("(none)"))
        .replace("{career_journey}", &input.career_journey)
}

const ARTICLE_SUMMARY_TEMPLATE: &str = r#"You are an expert technical writer. Analyze the following article content and generate a concise summary.

The summary must:
1. Be exactly three sentences long.
2. Focus on the key technical concepts, conclusions, or takeaways.
3. Be easy to understand for a developer audience.
4. Contain no meta-commentary about the article or the summarization itself.

Return a JSON object: {"summary": "..."}

Article Content:
{content}"#;

pub fn build_article_prompt(content: &str) -> String {
    ARTICLE_SUMMARY_TEMPLATE.replace("{content}", content)
}
