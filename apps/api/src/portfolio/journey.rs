#![allow(dead_code)]

//! Career Timeline Merger — combines AI-extracted work/education entries
//! with user-entered manual entries into one chronologically ordered,
//! de-duplicated timeline.
//!
//! Ordering rule: sort by end date descending, where the literal `"Present"`
//! is later than any calendar date and an unparseable date is older than any
//! calendar date. Merging the same inputs twice yields the same sequence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::types::{EducationEntry, WorkExperience};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyKind {
    Work,
    Education,
}

/// A single timeline entry. Two provenance classes coexist: AI-derived
/// entries (positional ids, regenerated on every analysis call) and manual
/// entries (caller-supplied ids, the only ones deletable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyEntry {
    pub id: String,
    pub kind: JourneyKind,
    pub organization: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_ai_generated: bool,
}

/// End-date ordering key. Variant order matters: derived `Ord` ranks
/// `Unparseable < Date(_) < Present`, and dates compare naturally within
/// `Date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EndDateKey {
    Unparseable,
    Date(NaiveDate),
    Present,
}

/// The literal token an open-ended role carries as its end date.
pub const PRESENT: &str = "Present";

fn end_date_key(end_date: &str) -> EndDateKey {
    let trimmed = end_date.trim();
    if trimmed == PRESENT {
        return EndDateKey::Present;
    }
    parse_month_year(trimmed)
        .map(EndDateKey::Date)
        .unwrap_or(EndDateKey::Unparseable)
}

/// Parses the `"<Month> <Year>"` textual form (e.g. "August 2021"),
/// accepting both full and abbreviated month names. Entries compare at
/// month granularity; the day is pinned to the 1st.
fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let padded = format!("{text} 1");
    NaiveDate::parse_from_str(&padded, "%B %Y %d")
        .or_else(|_| NaiveDate::parse_from_str(&padded, "%b %Y %d"))
        .ok()
}

fn sort_newest_first(entries: &mut [JourneyEntry]) {
    // Stable sort: ties keep concatenation order (work, education, manual).
    entries.sort_by(|a, b| end_date_key(&b.end_date).cmp(&end_date_key(&a.end_date)));
}

/// Merges AI-derived and manual entries into one ordered timeline.
///
/// AI entries receive stable positional ids (`ai-work-<i>` / `ai-edu-<i>`),
/// so re-rendering unchanged analysis output is idempotent. Manual entries
/// pass through with their caller-supplied ids.
pub fn merge_timeline(
    ai_work: &[WorkExperience],
    ai_education: &[EducationEntry],
    manual: &[JourneyEntry],
) -> Vec<JourneyEntry> {
    let mut entries: Vec<JourneyEntry> = Vec::with_capacity(
        ai_work.len() + ai_education.len() + manual.len(),
    );

    for (index, item) in ai_work.iter().enumerate() {
        entries.push(JourneyEntry {
            id: format!("ai-work-{index}"),
            kind: JourneyKind::Work,
            organization: item.organization.clone(),
            role: item.role.clone(),
            start_date: item.start_date.clone(),
            end_date: item.end_date.clone(),
            description: item.description.clone(),
            is_ai_generated: true,
        });
    }

    for (index, item) in ai_education.iter().enumerate() {
        entries.push(JourneyEntry {
            id: format!("ai-edu-{index}"),
            kind: JourneyKind::Education,
            organization: item.organization.clone(),
            role: item.degree.clone(),
            start_date: item.start_date.clone(),
            end_date: item.end_date.clone(),
            description: item.description.clone(),
            is_ai_generated: true,
        });
    }

    entries.extend(manual.iter().cloned());

    sort_newest_first(&mut entries);
    entries
}

/// The mutable timeline behind the career-journey section. AI entries are
/// regenerated on each analysis call and are never removable here — only a
/// re-run of analysis replaces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerTimeline {
    entries: Vec<JourneyEntry>,
}

impl CareerTimeline {
    pub fn new(entries: Vec<JourneyEntry>) -> Self {
        let mut timeline = Self { entries };
        sort_newest_first(&mut timeline.entries);
        timeline
    }

    pub fn entries(&self) -> &[JourneyEntry] {
        &self.entries
    }

    /// Appends a manual entry and re-sorts.
    pub fn add(&mut self, entry: JourneyEntry) {
        self.entries.push(entry);
        sort_newest_first(&mut self.entries);
    }

    /// Deletes a manual entry by id. AI-derived entries are not deletable;
    /// returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.is_ai_generated || e.id != id);
        self.entries.len() != before
    }
}
