//! Command-line front end: parses user input, runs intake checks, calls the
//! agent and renders the result as text or JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::advisor::job_search::ExperienceLevel;
use crate::agent::CareerAgent;
use crate::errors::AgentError;
use crate::intake;
use crate::profile::UserProfile;
use crate::render;

/// Career development assistant
///
/// Resume keyword scoring, interview preparation, career path suggestions and
/// job search plans, driven by editable JSON reference tables.
#[derive(Parser, Debug)]
#[command(name = "career-agent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the reference tables (overrides CAREER_RESOURCES_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a resume against the keyword table
    Resume {
        /// Read the resume from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text", required_unless_present = "text")]
        file: Option<PathBuf>,

        /// Resume text given inline
        #[arg(long)]
        text: Option<String>,
    },

    /// Show interview questions, preparation tips and technical topics
    Interview {
        /// Target job title
        #[arg(long, default_value = "")]
        title: String,
    },

    /// Suggest career paths from interests and skills
    Careers {
        /// Comma-separated interests
        #[arg(long)]
        interests: String,

        /// Comma-separated skills
        #[arg(long)]
        skills: String,
    },

    /// Generate a job search plan
    Plan {
        /// Target job title
        #[arg(long)]
        title: String,

        /// Preferred location
        #[arg(long)]
        location: String,

        /// Experience level: entry, mid or senior
        #[arg(long, default_value = "entry")]
        level: String,
    },

    /// Manage the user profile record
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print a saved profile
    Show {
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },

    /// Set one or more fields and save (creates the record if missing)
    Set {
        #[arg(long, value_name = "PATH")]
        file: PathBuf,

        /// Fields as KEY=VALUE
        #[arg(required = true, value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

fn parse_field(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn output<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}

/// Runs one command and returns what should be printed.
pub fn execute(command: Command, agent: &CareerAgent, json: bool) -> Result<String> {
    match command {
        Command::Resume { file, text } => {
            let resume = match (file, text) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .map_err(|e| AgentError::io(&path, e))
                    .with_context(|| format!("Could not read resume {}", path.display()))?,
                (None, Some(text)) => text,
                (None, None) => {
                    return Err(AgentError::Validation("No resume given.".to_string()).into())
                }
            };
            let resume = intake::resume_text(&resume)?;
            let analysis = agent.analyze_resume(resume);
            output(json, &analysis, render::render_resume_analysis)
        }
        Command::Interview { title } => {
            let tips = agent.interview_tips(&title);
            output(json, &tips, render::render_interview_tips)
        }
        Command::Careers { interests, skills } => {
            let (interests, skills) = intake::career_inputs(&interests, &skills)?;
            let suggestions = agent.suggest_career_paths(&interests, &skills);
            output(json, &suggestions, |s| render::render_career_paths(s))
        }
        Command::Plan {
            title,
            location,
            level,
        } => {
            let (title, location) = intake::plan_inputs(&title, &location)?;
            let level: ExperienceLevel = level.parse().unwrap_or_else(|never| match never {});
            let plan = agent.generate_job_search_plan(title, location, &level);
            output(json, &plan, |p| render::render_job_search_plan(p, title, location))
        }
        Command::Profile { action } => match action {
            ProfileAction::Show { file } => {
                let profile = agent.load_profile(&file)?;
                output(json, &profile, render::render_profile)
            }
            ProfileAction::Set { file, fields } => {
                let mut profile = load_or_new(agent, &file)?;
                for (key, value) in &fields {
                    profile = agent.update_profile(profile, key, value);
                }
                agent.save_profile(&file, &mut profile)?;
                info!(
                    "Updated {} profile field(s), last_updated {}",
                    fields.len(),
                    profile.last_updated().unwrap_or("-")
                );
                output(json, &profile, render::render_profile)
            }
        },
    }
}

fn load_or_new(agent: &CareerAgent, file: &Path) -> Result<UserProfile> {
    let exists = file
        .try_exists()
        .map_err(|e| AgentError::io(file, e))?;
    if exists {
        Ok(agent.load_profile(file)?)
    } else {
        Ok(UserProfile::new())
    }
}
