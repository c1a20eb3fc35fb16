// src/session/render.rs — Pure display derivations for turns and citations

use chrono::{DateTime, Local};

use crate::client::Citation;

/// Source names containing any of these (case-insensitive) get the accent style.
pub const HIGHLIGHT_KEYWORDS: [&str; 5] = ["women", "protection", "rights", "marriage", "property"];

/// Document suffixes dropped from source names.
const DOCUMENT_SUFFIXES: [&str; 5] = [".pdf", ".docx", ".doc", ".txt", ".md"];

/// Remove literal `*` emphasis markers from answer text.
pub fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|&c| c != '*').collect()
}

/// `"Women_Protection_Act.pdf"` -> `"Women Protection Act"`.
pub fn display_source_name(source: &str) -> String {
    let lower = source.to_ascii_lowercase();
    let stem = DOCUMENT_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map(|suffix| &source[..source.len() - suffix.len()])
        .unwrap_or(source);
    stem.replace('_', " ")
}

/// Relevance in [0,1] as a rounded percentage, clamped to 0..=100.
pub fn relevance_percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn is_highlighted_source(source: &str) -> bool {
    let lower = source.to_lowercase();
    HIGHLIGHT_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn format_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}

/// Display form of one citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationChip {
    pub name: String,
    pub page: String,
    pub relevance: String,
    pub highlighted: bool,
}

impl CitationChip {
    pub fn from_citation(c: &Citation) -> Self {
        Self {
            name: display_source_name(&c.source),
            page: format!("Page {}", c.page),
            relevance: format!("Relevance: {}%", relevance_percent(c.relevance_score)),
            highlighted: is_highlighted_source(&c.source),
        }
    }
}

pub fn chips(sources: &[Citation]) -> Vec<CitationChip> {
    sources.iter().map(CitationChip::from_citation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_source_name() {
        assert_eq!(display_source_name("Women_Protection_Act.pdf"), "Women Protection Act");
        assert_eq!(display_source_name("Family_Law.PDF"), "Family Law");
        assert_eq!(display_source_name("Muslim_Family_Laws_Ordinance"), "Muslim Family Laws Ordinance");
        assert_eq!(display_source_name("notes.txt"), "notes");
    }

    #[test]
    fn test_display_source_name_keeps_inner_dots() {
        assert_eq!(display_source_name("Act_No._5_of_1961.pdf"), "Act No. 5 of 1961");
    }

    #[test]
    fn test_relevance_percent() {
        assert_eq!(relevance_percent(0.87), 87);
        assert_eq!(relevance_percent(0.875), 88);
        assert_eq!(relevance_percent(0.0), 0);
        assert_eq!(relevance_percent(1.0), 100);
        assert_eq!(relevance_percent(1.4), 100);
        assert_eq!(relevance_percent(-0.2), 0);
        assert_eq!(relevance_percent(f64::NAN), 0);
    }

    #[test]
    fn test_highlight_keywords_case_insensitive() {
        assert!(is_highlighted_source("WOMEN_Protection_Act.pdf"));
        assert!(is_highlighted_source("Dissolution_of_Marriage.pdf"));
        assert!(is_highlighted_source("Property_Inheritance.pdf"));
        assert!(!is_highlighted_source("Family_Law.pdf"));
        assert!(!is_highlighted_source("Code_of_Criminal_Procedure.pdf"));
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("**Khula** is a *right*"), "Khula is a right");
        assert_eq!(strip_emphasis("no markers"), "no markers");
    }

    #[test]
    fn test_chip_for_family_law() {
        let chip = CitationChip::from_citation(&Citation {
            source: "Family_Law.pdf".into(),
            page: 12,
            chunk_id: 3,
            relevance_score: 0.87,
        });
        assert_eq!(
            chip,
            CitationChip {
                name: "Family Law".into(),
                page: "Page 12".into(),
                relevance: "Relevance: 87%".into(),
                highlighted: false,
            }
        );
    }

    #[test]
    fn test_format_time() {
        use chrono::TimeZone;
        let ts = Local.with_ymd_and_hms(2026, 3, 8, 9, 5, 0).unwrap();
        assert_eq!(format_time(&ts), "09:05");
    }
}
