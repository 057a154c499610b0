//! Job Search Plan Generator: a fixed day/week/timeline template with one
//! branch on experience level.
//!
//! Title and location never change plan content; callers only use them to
//! frame the rendered plan.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::JobSearchTips;

const DAILY_TASKS: [&str; 3] = [
    "Check new job postings on 2-3 platforms",
    "Send follow-ups on pending applications",
    "Connect with 1-2 new professionals in your field",
];

const WEEKLY_TASKS: [&str; 3] = [
    "Apply to 5-10 relevant positions",
    "Attend one networking event (virtual or in-person)",
    "Update job search tracking document",
];

const TIMELINE: [(&str, &str); 4] = [
    ("week1", "Research companies and update resume/LinkedIn"),
    ("week2", "Begin applications and networking"),
    ("week3", "Follow up on applications and continue applying"),
    ("week4", "Begin interview preparations while continuing applications"),
];

/// Experience level as entered by the user. Anything other than
/// entry/mid/senior (case-insensitive) is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Other(String),
}

impl FromStr for ExperienceLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "entry" => ExperienceLevel::Entry,
            "mid" => ExperienceLevel::Mid,
            "senior" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Other(s.to_string()),
        })
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Entry => f.write_str("entry"),
            ExperienceLevel::Mid => f.write_str("mid"),
            ExperienceLevel::Senior => f.write_str("senior"),
            ExperienceLevel::Other(raw) => f.write_str(raw),
        }
    }
}

/// What one experience level adds on top of the base template.
struct LevelExtras {
    daily_task: Option<&'static str>,
    weekly_task: Option<&'static str>,
    additional: [&'static str; 2],
}

fn level_extras(level: &ExperienceLevel) -> Option<LevelExtras> {
    match level {
        ExperienceLevel::Entry => Some(LevelExtras {
            daily_task: Some("Spend 30 minutes on skill development"),
            weekly_task: None,
            additional: ["Entry-level job fairs", "University career services"],
        }),
        ExperienceLevel::Mid => Some(LevelExtras {
            daily_task: None,
            weekly_task: Some("Research industry trends to mention in interviews"),
            additional: ["Professional associations", "Industry conferences"],
        }),
        ExperienceLevel::Senior => Some(LevelExtras {
            daily_task: None,
            weekly_task: Some("Schedule informational interviews with target companies"),
            additional: ["Executive recruiters", "Industry speaking opportunities"],
        }),
        ExperienceLevel::Other(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResources {
    pub job_boards: Vec<String>,
    pub networking_opportunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchPlan {
    pub daily_tasks: Vec<String>,
    pub weekly_tasks: Vec<String>,
    pub resources: PlanResources,
    /// week1..week4; key order is week order.
    pub timeline: BTreeMap<String, String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn generate_job_search_plan(
    tips: &JobSearchTips,
    job_title: &str,
    location: &str,
    level: &ExperienceLevel,
) -> JobSearchPlan {
    debug!("Generating job search plan for '{job_title}' in '{location}' at level '{level}'");

    let mut plan = JobSearchPlan {
        daily_tasks: owned(&DAILY_TASKS),
        weekly_tasks: owned(&WEEKLY_TASKS),
        resources: PlanResources {
            job_boards: tips.job_boards.clone(),
            networking_opportunities: tips.networking_tips.clone(),
            additional: None,
        },
        timeline: TIMELINE
            .iter()
            .map(|(week, activity)| (week.to_string(), activity.to_string()))
            .collect(),
    };

    if let Some(extras) = level_extras(level) {
        if let Some(task) = extras.daily_task {
            plan.daily_tasks.push(task.to_string());
        }
        if let Some(task) = extras.weekly_task {
            plan.weekly_tasks.push(task.to_string());
        }
        plan.resources.additional = Some(owned(&extras.additional));
    }

    plan
}
