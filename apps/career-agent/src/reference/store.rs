use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::errors::{AgentError, Result};
use crate::reference::{
    defaults, ReferenceData, CAREER_PATHS_FILE, INTERVIEW_QUESTIONS_FILE, JOB_SEARCH_TIPS_FILE,
};
use crate::storage::{read_json, write_json_atomic};

/// Loads all reference tables from `dir`, creating the directory and writing
/// default content for any record that does not exist yet.
///
/// Existing records are read as-is and never rewritten.
pub fn load_or_seed(dir: &Path) -> Result<ReferenceData> {
    std::fs::create_dir_all(dir).map_err(|e| AgentError::io(dir, e))?;

    let data = ReferenceData {
        job_search: load_record(dir, JOB_SEARCH_TIPS_FILE, defaults::job_search_tips)?,
        interview: load_record(dir, INTERVIEW_QUESTIONS_FILE, defaults::interview_bank)?,
        careers: load_record(dir, CAREER_PATHS_FILE, defaults::career_catalog)?,
    };

    info!(
        "Reference tables loaded from {} ({} keywords, {} questions)",
        dir.display(),
        data.job_search.resume_keywords.len(),
        data.interview.common_questions.len()
    );
    Ok(data)
}

fn load_record<T>(dir: &Path, file_name: &str, default: fn() -> T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let path = dir.join(file_name);
    let exists = path.try_exists().map_err(|e| AgentError::io(&path, e))?;
    if !exists {
        info!("Seeding default reference record {}", path.display());
        write_json_atomic(&path, &default())?;
    }
    read_json(&path)
}
