use std::path::PathBuf;

use anyhow::Result;

const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Adapter configuration loaded from environment variables.
/// Nothing here is required; every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub resources_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resources_dir: std::env::var("CAREER_RESOURCES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESOURCES_DIR)),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// A `--resources` flag wins over the environment.
    pub fn with_resources_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.resources_dir = dir;
        }
        self
    }
}
