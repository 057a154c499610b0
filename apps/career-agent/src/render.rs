//! Plain-text rendering of advisor results, one section per result pane.

use crate::advisor::interview::InterviewTips;
use crate::advisor::job_search::JobSearchPlan;
use crate::advisor::resume::ResumeAnalysis;
use crate::profile::{UserProfile, STANDARD_FIELDS};

const PLAN_RULE_WIDTH: usize = 50;
const PLAN_MAX_JOB_BOARDS: usize = 4;
const PLAN_MAX_NETWORKING: usize = 3;

const CAREER_NEXT_STEPS: [&str; 3] = [
    "Research these roles to learn more about daily responsibilities",
    "Identify any skill gaps and create a learning plan",
    "Connect with professionals in these fields for informational interviews",
];

fn heading(title: &str) -> String {
    format!("{title}\n{}\n\n", "=".repeat(title.chars().count()))
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}\n", i + 1))
        .collect()
}

fn bulleted(marker: &str, items: &[String]) -> String {
    items.iter().map(|item| format!("{marker} {item}\n")).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn render_resume_analysis(analysis: &ResumeAnalysis) -> String {
    let mut out = format!("Resume Score: {}/100\n\n", analysis.score);
    out.push_str("Keywords Found:\n");
    out.push_str(&bulleted("✓", &analysis.keywords_found));
    out.push_str("\nSuggested Keywords to Add:\n");
    out.push_str(&bulleted("-", &analysis.missing_keywords));
    out.push_str("\nImprovement Suggestions:\n");
    out.push_str(&bulleted("•", &analysis.suggestions));
    out
}

pub fn render_interview_tips(tips: &InterviewTips) -> String {
    let mut out = heading("COMMON INTERVIEW QUESTIONS");
    out.push_str(&numbered(&tips.common_questions));
    out.push_str("\n\n");
    out.push_str(&heading("PREPARATION TIPS"));
    out.push_str(&numbered(&tips.preparation_tips));

    if !tips.technical_topics.is_empty() {
        out.push_str("\n\n");
        out.push_str(&heading("RELEVANT TECHNICAL TOPICS TO STUDY"));
        out.push_str(&numbered(&tips.technical_topics));
    }
    out
}

pub fn render_career_paths(suggestions: &[String]) -> String {
    let mut out = heading("SUGGESTED CAREER PATHS");
    out.push_str("Based on your interests and skills, you might consider:\n\n");
    out.push_str(&numbered(suggestions));
    out.push_str("\n\nNext Steps:\n");
    for (i, step) in CAREER_NEXT_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }
    out
}

/// Title and location only appear in the header.
pub fn render_job_search_plan(plan: &JobSearchPlan, job_title: &str, location: &str) -> String {
    let mut out = format!(
        "JOB SEARCH PLAN: {} IN {}\n{}\n\n",
        job_title.to_uppercase(),
        location.to_uppercase(),
        "=".repeat(PLAN_RULE_WIDTH)
    );

    out.push_str("DAILY TASKS:\n");
    out.push_str(&bulleted("•", &plan.daily_tasks));
    out.push_str("\nWEEKLY TASKS:\n");
    out.push_str(&bulleted("•", &plan.weekly_tasks));

    let resources = &plan.resources;
    let boards: Vec<&str> = resources
        .job_boards
        .iter()
        .take(PLAN_MAX_JOB_BOARDS)
        .map(String::as_str)
        .collect();
    let networking: Vec<&str> = resources
        .networking_opportunities
        .iter()
        .take(PLAN_MAX_NETWORKING)
        .map(String::as_str)
        .collect();
    out.push_str("\nRECOMMENDED RESOURCES:\n");
    out.push_str(&format!("- Job Boards: {}\n", boards.join(", ")));
    out.push_str(&format!("- Networking: {}\n", networking.join(", ")));
    if let Some(additional) = &resources.additional {
        out.push_str(&format!("- Additional: {}\n", additional.join(", ")));
    }

    out.push_str("\nTIMELINE:\n");
    for (week, activity) in &plan.timeline {
        out.push_str(&format!("- {}: {activity}\n", capitalize(week)));
    }
    out
}

/// Form fields first, in form order, then every other key in key order.
pub fn render_profile(profile: &UserProfile) -> String {
    if profile.is_empty() {
        return "(empty profile)\n".to_string();
    }
    let standard = STANDARD_FIELDS
        .iter()
        .filter_map(|key| profile.get(key).map(|value| (*key, value)));
    let others = profile
        .fields()
        .filter(|(key, _)| !STANDARD_FIELDS.contains(key));
    standard
        .chain(others)
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::interview::interview_tips;
    use crate::advisor::job_search::{generate_job_search_plan, ExperienceLevel};
    use crate::profile::update_profile;
    use crate::reference::defaults;

    #[test]
    fn test_resume_rendering_sections() {
        let analysis = ResumeAnalysis {
            score: 60,
            keywords_found: vec!["led".to_string()],
            missing_keywords: vec!["skilled".to_string()],
            suggestions: vec!["Add more.".to_string()],
        };
        let text = render_resume_analysis(&analysis);
        assert!(text.starts_with("Resume Score: 60/100\n\n"));
        assert!(text.contains("Keywords Found:\n✓ led\n"));
        assert!(text.contains("Suggested Keywords to Add:\n- skilled\n"));
        assert!(text.ends_with("Improvement Suggestions:\n• Add more.\n"));
    }

    #[test]
    fn test_interview_topics_section_only_when_present() {
        let bank = defaults::interview_bank();
        let with_topics = render_interview_tips(&interview_tips(&bank, "Developer"));
        assert!(with_topics.contains("RELEVANT TECHNICAL TOPICS TO STUDY"));
        assert!(with_topics.contains("1. Data structures\n"));

        let without = render_interview_tips(&interview_tips(&bank, "Chef"));
        assert!(!without.contains("RELEVANT TECHNICAL TOPICS"));
        assert!(without.contains("1. Tell me about yourself\n"));
        assert!(without.contains("5. Bring extra copies of your resume\n"));
    }

    #[test]
    fn test_heading_is_underlined_to_length() {
        assert_eq!(heading("ABC"), "ABC\n===\n\n");
    }

    #[test]
    fn test_career_paths_numbered_with_next_steps() {
        let text = render_career_paths(&["Nurse".to_string(), "Data Scientist".to_string()]);
        assert!(text.contains("1. Nurse\n2. Data Scientist\n"));
        assert!(text.contains("Next Steps:\n1. Research these roles"));
    }

    #[test]
    fn test_plan_header_and_truncated_resources() {
        let plan = generate_job_search_plan(
            &defaults::job_search_tips(),
            "Data Analyst",
            "Berlin",
            &ExperienceLevel::Entry,
        );
        let text = render_job_search_plan(&plan, "Data Analyst", "Berlin");
        assert!(text.starts_with("JOB SEARCH PLAN: DATA ANALYST IN BERLIN\n"));
        assert!(text.contains("- Job Boards: LinkedIn, Indeed, Glassdoor, Monster\n"));
        assert!(text.contains(
            "- Networking: Attend industry events, Connect with alumni, Engage on LinkedIn\n"
        ));
        assert!(text.contains("- Additional: Entry-level job fairs, University career services\n"));
        assert!(text.contains("- Week1: Research companies and update resume/LinkedIn\n"));
        assert!(text.ends_with("- Week4: Begin interview preparations while continuing applications\n"));
    }

    #[test]
    fn test_plan_without_additional_line() {
        let plan = generate_job_search_plan(
            &defaults::job_search_tips(),
            "x",
            "y",
            &ExperienceLevel::Other("lead".to_string()),
        );
        assert!(!render_job_search_plan(&plan, "x", "y").contains("Additional"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("week1"), "Week1");
        assert_eq!(capitalize("WEEK2"), "Week2");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_profile_rendering() {
        assert_eq!(render_profile(&UserProfile::new()), "(empty profile)\n");
        let profile = update_profile(UserProfile::new(), "zodiac", "Leo");
        let profile = update_profile(profile, "education", "BSc");
        let profile = update_profile(profile, "name", "Ada");
        let profile = update_profile(profile, "last_updated", "2024-01-01 00:00:00");
        assert_eq!(
            render_profile(&profile),
            "name: Ada\neducation: BSc\nlast_updated: 2024-01-01 00:00:00\nzodiac: Leo\n"
        );
    }
}
