//! Seed content written to disk the first time a reference record is missing.

use crate::reference::{CareerCatalog, InterviewBank, JobSearchTips, TechnicalTopics};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn job_search_tips() -> JobSearchTips {
    JobSearchTips {
        resume_keywords: strings(&[
            "experienced",
            "skilled",
            "proficient",
            "managed",
            "led",
            "developed",
            "improved",
        ]),
        networking_tips: strings(&[
            "Attend industry events",
            "Connect with alumni",
            "Engage on LinkedIn",
            "Join professional groups",
        ]),
        job_boards: strings(&[
            "LinkedIn",
            "Indeed",
            "Glassdoor",
            "Monster",
            "Company websites",
            "Industry-specific boards",
        ]),
    }
}

pub fn interview_bank() -> InterviewBank {
    InterviewBank {
        common_questions: strings(&[
            "Tell me about yourself",
            "Why are you interested in this position?",
            "What are your strengths and weaknesses?",
            "Describe a challenge you faced and how you overcame it",
            "Where do you see yourself in 5 years?",
            "Why should we hire you?",
        ]),
        technical_topics: TechnicalTopics {
            programming: strings(&[
                "Data structures",
                "Algorithms",
                "System design",
                "Problem-solving process",
            ]),
            project_management: strings(&[
                "Risk management",
                "Agile methodologies",
                "Stakeholder communication",
            ]),
            marketing: strings(&[
                "Campaign analytics",
                "SEO knowledge",
                "Social media strategy",
            ]),
        },
    }
}

pub fn career_catalog() -> CareerCatalog {
    CareerCatalog {
        tech: strings(&[
            "Software Engineer",
            "Data Scientist",
            "Product Manager",
            "UX Designer",
            "DevOps Engineer",
        ]),
        business: strings(&[
            "Business Analyst",
            "Financial Analyst",
            "Management Consultant",
            "Marketing Specialist",
        ]),
        healthcare: strings(&[
            "Nurse",
            "Physician Assistant",
            "Health Informatics",
            "Healthcare Administrator",
        ]),
    }
}
