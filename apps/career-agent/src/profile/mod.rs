//! Profile Store: one user's free-text fields, persisted as a flat JSON record.

pub mod store;

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use store::{load_profile, save_profile};

pub const LAST_UPDATED_KEY: &str = "last_updated";
const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field keys the profile form collects. Informational only; any key is accepted.
pub const STANDARD_FIELDS: [&str; 5] = [
    "name",
    "current_title",
    "years_of_experience",
    "education",
    "skills",
];

/// Flat field-name → value mapping. Unknown keys survive a load/save round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    fields: BTreeMap<String, String>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.get(LAST_UPDATED_KEY)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets `last_updated`, replacing any previous value.
    pub(crate) fn stamp(&mut self, at: DateTime<Local>) {
        self.fields.insert(
            LAST_UPDATED_KEY.to_string(),
            at.format(LAST_UPDATED_FORMAT).to_string(),
        );
    }
}

/// Returns the profile with `key` set to `value`. No validation.
pub fn update_profile(
    mut profile: UserProfile,
    key: impl Into<String>,
    value: impl Into<String>,
) -> UserProfile {
    profile.fields.insert(key.into(), value.into());
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_update_sets_and_overwrites() {
        let profile = update_profile(UserProfile::new(), "name", "Ada");
        assert_eq!(profile.get("name"), Some("Ada"));
        let profile = update_profile(profile, "name", "Grace");
        assert_eq!(profile.get("name"), Some("Grace"));
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_update_accepts_any_key_and_empty_value() {
        let profile = update_profile(UserProfile::new(), "favourite colour", "");
        assert_eq!(profile.get("favourite colour"), Some(""));
    }

    #[test]
    fn test_stamp_formats_local_time() {
        let mut profile = UserProfile::new();
        let at = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 1).unwrap();
        profile.stamp(at);
        assert_eq!(profile.last_updated(), Some("2024-03-05 09:07:01"));
    }

    #[test]
    fn test_stamp_replaces_previous_value() {
        let mut profile = update_profile(UserProfile::new(), LAST_UPDATED_KEY, "yesterday");
        profile.stamp(Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(profile.last_updated(), Some("2025-01-01 00:00:00"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let profile = update_profile(UserProfile::new(), "education", "BSc");
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"education":"BSc"}"#);
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        assert!(serde_json::from_str::<UserProfile>(r#"{"years": 5}"#).is_err());
    }
}
