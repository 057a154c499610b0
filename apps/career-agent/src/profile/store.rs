use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::errors::Result;
use crate::profile::UserProfile;
use crate::storage::{read_json, write_json_atomic};

/// Reads a profile record. Fails with `Io` if unreadable, `Parse` if malformed.
pub fn load_profile(source: &Path) -> Result<UserProfile> {
    let profile: UserProfile = read_json(source)?;
    info!("Loaded profile from {} ({} fields)", source.display(), profile.len());
    Ok(profile)
}

/// Stamps `last_updated` with the current local time, then atomically writes
/// the whole profile to `destination`.
///
/// The stamp is applied to the caller's profile even if the write fails.
pub fn save_profile(destination: &Path, profile: &mut UserProfile) -> Result<()> {
    profile.stamp(Local::now());
    write_json_atomic(destination, &*profile)?;
    info!("Saved profile to {}", destination.display());
    Ok(())
}
