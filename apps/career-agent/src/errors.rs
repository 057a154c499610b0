use std::path::PathBuf;

use thiserror::Error;

/// Engine-level error type.
/// Matching and scoring never fail; only record I/O and caller intake do.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AgentError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AgentError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        AgentError::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = AgentError::io(
            "profiles/me.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("profiles/me.json"), "got: {msg}");
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_parse_error_names_the_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AgentError::parse("resources/career_paths.json", source);
        assert!(err.to_string().starts_with("Malformed record resources/career_paths.json"));
    }

    #[test]
    fn test_validation_message() {
        let err = AgentError::Validation("Please enter both job title and location.".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter both job title and location."
        );
    }
}
