use std::path::Path;

use crate::advisor::career_paths::suggest_career_paths;
use crate::advisor::interview::{interview_tips, InterviewTips};
use crate::advisor::job_search::{generate_job_search_plan, ExperienceLevel, JobSearchPlan};
use crate::advisor::resume::{ResumeAnalysis, ResumeAnalyzer};
use crate::errors::Result;
use crate::profile::UserProfile;
use crate::reference::{self, ReferenceData};

/// The caller-facing operation surface.
///
/// Owns the reference tables, loaded once and never mutated, and hands them
/// to each advisor by reference. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct CareerAgent {
    reference: ReferenceData,
    resume: ResumeAnalyzer,
}

impl CareerAgent {
    pub fn new(reference: ReferenceData) -> Self {
        let resume = ResumeAnalyzer::new(&reference.job_search);
        Self { reference, resume }
    }

    /// Loads (seeding if needed) the reference tables under `resources_dir`.
    pub fn load(resources_dir: &Path) -> Result<Self> {
        Ok(Self::new(reference::load_or_seed(resources_dir)?))
    }

    pub fn analyze_resume(&self, text: &str) -> ResumeAnalysis {
        self.resume.analyze(text)
    }

    pub fn interview_tips(&self, job_title: &str) -> InterviewTips {
        interview_tips(&self.reference.interview, job_title)
    }

    pub fn suggest_career_paths<S: AsRef<str>>(&self, interests: &[S], skills: &[S]) -> Vec<String> {
        suggest_career_paths(&self.reference.careers, interests, skills)
    }

    pub fn generate_job_search_plan(
        &self,
        job_title: &str,
        location: &str,
        level: &ExperienceLevel,
    ) -> JobSearchPlan {
        generate_job_search_plan(&self.reference.job_search, job_title, location, level)
    }

    pub fn load_profile(&self, source: &Path) -> Result<UserProfile> {
        crate::profile::load_profile(source)
    }

    pub fn save_profile(&self, destination: &Path, profile: &mut UserProfile) -> Result<()> {
        crate::profile::save_profile(destination, profile)
    }

    pub fn update_profile(&self, profile: UserProfile, key: &str, value: &str) -> UserProfile {
        crate::profile::update_profile(profile, key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_seeds_and_serves_defaults() {
        let dir = TempDir::new().unwrap();
        let agent = CareerAgent::load(dir.path()).unwrap();
        assert_eq!(agent.reference, ReferenceData::default());

        let tips = agent.interview_tips("Web Developer");
        assert_eq!(tips.technical_topics.len(), 4);
    }

    #[test]
    fn test_operations_use_loaded_tables() {
        let mut reference = ReferenceData::default();
        reference.job_search.resume_keywords = vec!["rust".to_string()];
        reference.job_search.job_boards = vec!["RustJobs".to_string()];
        let agent = CareerAgent::new(reference);

        let analysis = agent.analyze_resume("Wrote Rust services");
        assert_eq!(analysis.keywords_found, vec!["rust".to_string()]);
        assert_eq!(analysis.score, 100);

        let plan = agent.generate_job_search_plan("Dev", "Oslo", &ExperienceLevel::Mid);
        assert_eq!(plan.resources.job_boards, vec!["RustJobs".to_string()]);
    }

    #[test]
    fn test_career_suggestions_through_facade() {
        let agent = CareerAgent::new(ReferenceData::default());
        let paths = agent.suggest_career_paths(&["coding"], &["finance"]);
        assert_eq!(paths.first().map(String::as_str), Some("Software Engineer"));
        assert_eq!(paths.last().map(String::as_str), Some("Marketing Specialist"));
    }

    #[test]
    fn test_profile_cycle_through_facade() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("me.json");
        let agent = CareerAgent::new(ReferenceData::default());

        let mut profile = agent.update_profile(UserProfile::new(), "name", "Ada");
        agent.save_profile(&path, &mut profile).unwrap();
        assert_eq!(agent.load_profile(&path).unwrap(), profile);
    }
}
