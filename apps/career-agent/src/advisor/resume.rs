//! Resume Analyzer: scores free-text resume content against the keyword table
//! and a few structural heuristics.
//!
//! Algorithm:
//! 1. Each table keyword is a case-insensitive whole-word match; found and
//!    missing lists both keep table order.
//! 2. score = min(100, round(found / total × 70 + 30)); an empty table scores 30.
//! 3. Suggestions are appended independently, in a fixed order:
//!    length, summary, achievement language.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::reference::JobSearchTips;

/// Floor of the score; what a resume matching no keyword gets.
pub const BASE_SCORE: u32 = 30;
const KEYWORD_WEIGHT: f64 = 70.0;
const MAX_SCORE: f64 = 100.0;

const MIN_WORD_COUNT: usize = 200;
const SUMMARY_MARKERS: &[&str] = &["objective", "summary"];
const ACHIEVEMENT_WORDS: &[&str] = &[
    "achieved",
    "accomplishment",
    "improved",
    "increased",
    "decreased",
    "reduced",
    "saved",
    "delivered",
];

pub const SHORT_RESUME_SUGGESTION: &str =
    "Your resume seems short. Consider adding more details about your experience.";
pub const SUMMARY_SUGGESTION: &str = "Consider adding a career objective or professional summary.";
pub const ACHIEVEMENT_SUGGESTION: &str =
    "Add more achievement-oriented language with measurable results.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub score: u32, // 0 – 100
    pub keywords_found: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Case-insensitive matcher for one term bounded by non-word characters or
/// the ends of the text.
#[derive(Debug, Clone)]
struct WholeWord {
    term: String,
    pattern: Option<Regex>,
}

impl WholeWord {
    fn new(term: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
            .map_err(|e| warn!("Keyword '{term}' cannot be matched: {e}"))
            .ok();
        Self {
            term: term.to_string(),
            pattern,
        }
    }

    fn is_in(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// Resume scorer built once from the keyword table. Holds no per-request
/// state, so repeated analysis of the same text gives identical results.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    keywords: Vec<WholeWord>,
    achievement_words: Vec<WholeWord>,
}

impl ResumeAnalyzer {
    pub fn new(tips: &JobSearchTips) -> Self {
        Self {
            keywords: tips.resume_keywords.iter().map(|k| WholeWord::new(k)).collect(),
            achievement_words: ACHIEVEMENT_WORDS.iter().map(|w| WholeWord::new(w)).collect(),
        }
    }

    pub fn analyze(&self, resume_text: &str) -> ResumeAnalysis {
        let (found, missing): (Vec<&WholeWord>, Vec<&WholeWord>) =
            self.keywords.iter().partition(|k| k.is_in(resume_text));

        let score = compute_score(found.len(), self.keywords.len());
        let suggestions = self.suggestions(resume_text);

        debug!(
            "Resume scored {score} ({}/{} keywords, {} suggestions)",
            found.len(),
            self.keywords.len(),
            suggestions.len()
        );

        ResumeAnalysis {
            score,
            keywords_found: found.into_iter().map(|k| k.term.clone()).collect(),
            missing_keywords: missing.into_iter().map(|k| k.term.clone()).collect(),
            suggestions,
        }
    }

    fn suggestions(&self, resume_text: &str) -> Vec<String> {
        let mut suggestions = Vec::new();

        if resume_text.split_whitespace().count() < MIN_WORD_COUNT {
            suggestions.push(SHORT_RESUME_SUGGESTION.to_string());
        }

        let text_lower = resume_text.to_lowercase();
        if !SUMMARY_MARKERS.iter().any(|m| text_lower.contains(m)) {
            suggestions.push(SUMMARY_SUGGESTION.to_string());
        }

        if !self.achievement_words.iter().any(|w| w.is_in(resume_text)) {
            suggestions.push(ACHIEVEMENT_SUGGESTION.to_string());
        }

        suggestions
    }
}

/// Ties round to even, so 82.5 scores 82 and 47.5 scores 48.
fn compute_score(found: usize, total: usize) -> u32 {
    if total == 0 {
        return BASE_SCORE;
    }
    let raw = (found as f64 / total as f64) * KEYWORD_WEIGHT + BASE_SCORE as f64;
    raw.min(MAX_SCORE).round_ties_even() as u32
}
