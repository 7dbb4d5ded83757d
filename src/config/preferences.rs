//! Key/value preference storage
//!
//! Holds the handful of values the user changes from the UI (currently only
//! the theme flag). Stored as a flat JSON object next to the site config.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Client-local persistent storage for string preferences
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn store(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a JSON object file
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Default location: `{config_dir}/folio-showcase/preferences.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::PREFERENCES_FILENAME);
        path
    }

    pub fn open_default() -> Self {
        Self::at(Self::default_path())
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {:?}", self.path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences JSON from {:?}", self.path))
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.read_all()?;
        Ok(values.remove(key))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file gets replaced rather than blocking the write
        let mut values = self.read_all().unwrap_or_else(|err| {
            debug!(error = %err, "Discarding unreadable preferences file");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&values)
            .context("Failed to serialize preferences to JSON")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {:?}", self.path))?;

        info!(key, value, path = %self.path.display(), "Saved preference");
        Ok(())
    }
}

/// Volatile store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_store_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::at(dir.path().join("preferences.json"));

        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_json_store_roundtrip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = JsonPreferenceStore::at(path.clone());

        store.store("theme", "dark").unwrap();
        assert!(path.exists());

        let reopened = JsonPreferenceStore::at(path);
        assert_eq!(reopened.load("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_json_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonPreferenceStore::at(dir.path().join("preferences.json"));

        store.store("language", "pt-BR").unwrap();
        store.store("theme", "light").unwrap();
        store.store("theme", "dark").unwrap();

        assert_eq!(store.load("language").unwrap(), Some("pt-BR".to_string()));
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_json_store_corrupt_file_errors_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonPreferenceStore::at(path);
        assert!(store.load("theme").is_err());
    }

    #[test]
    fn test_json_store_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = JsonPreferenceStore::at(path);
        store.store("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::with("theme", "light");
        assert_eq!(store.load("theme").unwrap(), Some("light".to_string()));

        store.store("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.load("missing").unwrap(), None);
    }
}
