//! Reference Data Store: the three read-only lookup tables every advisor draws from.
//!
//! Tables are loaded once at startup (seeded with defaults when absent) and then
//! handed to the advisors by shared reference. Nothing mutates them at runtime.

pub mod defaults;
pub mod store;

use serde::{Deserialize, Serialize};

pub use store::load_or_seed;

/// File names of the persisted reference records inside the resources directory.
pub const JOB_SEARCH_TIPS_FILE: &str = "job_search_tips.json";
pub const INTERVIEW_QUESTIONS_FILE: &str = "interview_questions.json";
pub const CAREER_PATHS_FILE: &str = "career_paths.json";

/// Resume keywords, networking tips and job boards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchTips {
    pub resume_keywords: Vec<String>,
    pub networking_tips: Vec<String>,
    pub job_boards: Vec<String>,
}

/// Technical topic category an interview title can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Programming,
    ProjectManagement,
    Marketing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalTopics {
    pub programming: Vec<String>,
    pub project_management: Vec<String>,
    pub marketing: Vec<String>,
}

impl TechnicalTopics {
    pub fn topics(&self, category: TopicCategory) -> &[String] {
        match category {
            TopicCategory::Programming => &self.programming,
            TopicCategory::ProjectManagement => &self.project_management,
            TopicCategory::Marketing => &self.marketing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewBank {
    pub common_questions: Vec<String>,
    pub technical_topics: TechnicalTopics,
}

/// Career-path category. `ALL` is the fixed priority order used for both
/// matching and the no-match fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Tech,
    Business,
    Healthcare,
}

impl CareerCategory {
    pub const ALL: [CareerCategory; 3] = [
        CareerCategory::Tech,
        CareerCategory::Business,
        CareerCategory::Healthcare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareerCategory::Tech => "tech",
            CareerCategory::Business => "business",
            CareerCategory::Healthcare => "healthcare",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCatalog {
    pub tech: Vec<String>,
    pub business: Vec<String>,
    pub healthcare: Vec<String>,
}

impl CareerCatalog {
    pub fn paths(&self, category: CareerCategory) -> &[String] {
        match category {
            CareerCategory::Tech => &self.tech,
            CareerCategory::Business => &self.business,
            CareerCategory::Healthcare => &self.healthcare,
        }
    }
}

/// All reference tables, immutable for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub job_search: JobSearchTips,
    pub interview: InterviewBank,
    pub careers: CareerCatalog,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            job_search: defaults::job_search_tips(),
            interview: defaults::interview_bank(),
            careers: defaults::career_catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_category_order_is_tech_business_healthcare() {
        let names: Vec<_> = CareerCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["tech", "business", "healthcare"]);
    }

    #[test]
    fn test_topics_lookup_by_category() {
        let bank = defaults::interview_bank();
        assert_eq!(
            bank.technical_topics.topics(TopicCategory::Marketing),
            bank.technical_topics.marketing.as_slice()
        );
    }

    #[test]
    fn test_career_catalog_deserializes_from_record_shape() {
        let json = r#"{
            "tech": ["Software Engineer"],
            "business": ["Business Analyst"],
            "healthcare": ["Nurse"]
        }"#;
        let catalog: CareerCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.paths(CareerCategory::Healthcare), ["Nurse".to_string()]);
    }

    #[test]
    fn test_career_catalog_missing_category_is_rejected() {
        let json = r#"{ "tech": [], "business": [] }"#;
        assert!(serde_json::from_str::<CareerCatalog>(json).is_err());
    }

    #[test]
    fn test_topic_category_serde_snake_case() {
        let json = serde_json::to_string(&TopicCategory::ProjectManagement).unwrap();
        assert_eq!(json, r#""project_management""#);
    }
}
