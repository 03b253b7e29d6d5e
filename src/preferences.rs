//! User preferences stored as preferences.json in the app data directory

use crate::constants::*;
use crate::error::PreferenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A single stored preference value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i32),
    String(String),
}

impl PrefValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            PrefValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Value returned for a key that has never been written
fn default_value(key: &str) -> Option<PrefValue> {
    match key {
        MAX_RATE => Some(PrefValue::String(DEFAULT_MAX_RATE.to_owned())),
        CONCURRENT => Some(PrefValue::Int(DEFAULT_CONCURRENT)),
        _ => None,
    }
}

/// Typed key-value access to persisted preferences.
///
/// Implementors only provide raw lookup and storage; the typed getters fall
/// back to the key's default when the value is absent or of another type.
pub trait PreferenceStore {
    fn value(&self, key: &str) -> Option<&PrefValue>;
    fn set(&mut self, key: &str, value: PrefValue);

    fn get_string(&self, key: &str) -> String {
        match self.value(key) {
            Some(PrefValue::String(s)) => s.clone(),
            _ => match default_value(key) {
                Some(PrefValue::String(s)) => s,
                _ => String::new(),
            },
        }
    }

    fn get_int(&self, key: &str) -> i32 {
        match self.value(key) {
            Some(PrefValue::Int(v)) => *v,
            _ => default_value(key).and_then(|v| v.as_int()).unwrap_or(0),
        }
    }

    fn get_bool(&self, key: &str) -> bool {
        matches!(self.value(key), Some(PrefValue::Bool(true)))
    }

    fn update_string(&mut self, key: &str, value: &str) {
        self.set(key, PrefValue::String(value.to_owned()));
    }

    fn update_int(&mut self, key: &str, value: i32) {
        self.set(key, PrefValue::Int(value));
    }

    fn update_bool(&mut self, key: &str, value: bool) {
        self.set(key, PrefValue::Bool(value));
    }
}

/// File-backed store. Every update is written through to disk.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl JsonPreferences {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(PREFERENCES_FILE);
        let values = match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(values) => {
                    debug!(path = %path.display(), "Preferences loaded");
                    values
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse preferences, using defaults");
                    BTreeMap::new()
                }
            },
            Err(_) => {
                debug!("No preferences file found, using defaults");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn save(&self) -> Result<(), PreferenceError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn value(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        debug!(key, value = ?value, "Preference updated");
        self.values.insert(key.to_owned(), value);
        if let Err(e) = self.save() {
            warn!(error = %e, key, "Failed to save preferences");
        }
    }
}

/// In-memory store for tests, counting writes
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
    writes: usize,
}

#[cfg(test)]
impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls seen so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferences {
    fn value(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.writes += 1;
        self.values.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_unset_keys() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_string(MAX_RATE), "1000");
        assert_eq!(prefs.get_int(CONCURRENT), 8);
        assert_eq!(prefs.get_string(COOKIES_DOMAIN), "");
        assert!(!prefs.get_bool(RATE_LIMIT));
    }

    #[test]
    fn mismatched_type_falls_back_to_default() {
        let mut prefs = MemoryPreferences::new();
        prefs.update_string(CONCURRENT, "twelve");
        assert_eq!(prefs.get_int(CONCURRENT), 8);
    }

    #[test]
    fn json_store_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();

        let mut prefs = JsonPreferences::load(dir.path());
        prefs.update_string(MAX_RATE, "2500");
        prefs.update_int(CONCURRENT, 12);
        prefs.update_bool(COOKIES, true);
        prefs.update_string(COOKIES_FILE, "# Netscape HTTP Cookie File\n");

        let reloaded = JsonPreferences::load(dir.path());
        assert_eq!(reloaded.get_string(MAX_RATE), "2500");
        assert_eq!(reloaded.get_int(CONCURRENT), 12);
        assert!(reloaded.get_bool(COOKIES));
        assert_eq!(reloaded.get_string(COOKIES_FILE), "# Netscape HTTP Cookie File\n");
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "{ not json").unwrap();

        let prefs = JsonPreferences::load(dir.path());
        assert_eq!(prefs.get_string(MAX_RATE), "1000");
        assert!(prefs.value(CONCURRENT).is_none());
    }

    #[test]
    fn digit_strings_stay_strings_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = JsonPreferences::load(dir.path());
        prefs.update_string(MAX_RATE, "42");

        let raw = std::fs::read_to_string(dir.path().join(PREFERENCES_FILE)).unwrap();
        assert!(raw.contains("\"42\""));
        assert_eq!(JsonPreferences::load(dir.path()).get_string(MAX_RATE), "42");
    }
}
