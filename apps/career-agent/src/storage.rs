//! JSON record I/O shared by the reference tables and the profile store.
//!
//! Records are pretty-printed with four-space indentation so they stay
//! hand-editable. Writes land in a temporary file next to the destination and
//! are renamed over it, so readers never observe a half-written record.

use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{AgentError, Result};

/// Reads and deserializes a JSON record.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|e| AgentError::io(path, e))?;
    serde_json::from_str(&raw).map_err(|e| AgentError::parse(path, e))
}

/// Serializes `value` and atomically replaces the record at `path`.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = to_pretty_json(value).map_err(|e| {
        AgentError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| AgentError::io(dir, e))?;
    temp_file
        .write_all(&body)
        .map_err(|e| AgentError::io(path, e))?;
    temp_file.flush().map_err(|e| AgentError::io(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| AgentError::io(path, e.error))?;

    debug!("Wrote {} bytes to {}", body.len(), path.display());
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
