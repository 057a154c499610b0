//! Interview Advisor: fixed question bank and preparation tips, plus a
//! technical-topic subset picked from the job title.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::{InterviewBank, TopicCategory};

pub const PREPARATION_TIPS: [&str; 5] = [
    "Research the company thoroughly",
    "Practice your answers out loud",
    "Prepare questions to ask the interviewer",
    "Plan your outfit and travel route in advance",
    "Bring extra copies of your resume",
];

/// Title substrings mapped to topic categories, checked top to bottom.
/// The first rule with any matching substring wins.
const TITLE_RULES: &[(&[&str], TopicCategory)] = &[
    (
        &["software", "developer", "engineer"],
        TopicCategory::Programming,
    ),
    (&["project", "manager"], TopicCategory::ProjectManagement),
    (&["market"], TopicCategory::Marketing),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewTips {
    pub common_questions: Vec<String>,
    pub preparation_tips: Vec<String>,
    /// Empty when the title matches no category.
    pub technical_topics: Vec<String>,
}

/// Returns the topic category for a job title, if any rule matches.
pub fn classify_title(job_title: &str) -> Option<TopicCategory> {
    let title_lower = job_title.to_lowercase();
    TITLE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| title_lower.contains(n)))
        .map(|(_, category)| *category)
}

pub fn interview_tips(bank: &InterviewBank, job_title: &str) -> InterviewTips {
    let category = classify_title(job_title);
    debug!("Interview title '{job_title}' classified as {category:?}");

    let technical_topics = category
        .map(|c| bank.technical_topics.topics(c).to_vec())
        .unwrap_or_default();

    InterviewTips {
        common_questions: bank.common_questions.clone(),
        preparation_tips: PREPARATION_TIPS.iter().map(|s| s.to_string()).collect(),
        technical_topics,
    }
}
