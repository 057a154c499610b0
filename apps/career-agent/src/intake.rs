//! Caller-side checks on form input before it reaches the engine.
//! The engine itself never rejects input; these are the adapter's job.

use crate::errors::{AgentError, Result};

pub const MIN_RESUME_CHARS: usize = 50;

/// Rejects resume text that is too short to be worth analyzing.
pub fn resume_text(text: &str) -> Result<&str> {
    if text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AgentError::Validation(
            "Please enter a longer resume text for better analysis.".to_string(),
        ));
    }
    Ok(text)
}

/// Splits a comma-separated field into trimmed, non-empty items.
pub fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Both interests and skills must be filled in.
pub fn career_inputs(interests: &str, skills: &str) -> Result<(Vec<String>, Vec<String>)> {
    if interests.trim().is_empty() || skills.trim().is_empty() {
        return Err(AgentError::Validation(
            "Please enter both interests and skills.".to_string(),
        ));
    }
    Ok((comma_list(interests), comma_list(skills)))
}

/// Both job title and location must be filled in.
pub fn plan_inputs<'a>(job_title: &'a str, location: &'a str) -> Result<(&'a str, &'a str)> {
    if job_title.trim().is_empty() || location.trim().is_empty() {
        return Err(AgentError::Validation(
            "Please enter both job title and location.".to_string(),
        ));
    }
    Ok((job_title, location))
}
