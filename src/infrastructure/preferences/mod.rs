use crate::domain::repositories::PreferenceStore;
use anyhow::{Context, Result, anyhow};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Preferences kept as a flat JSON object of string values.
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new() -> Self {
        Self::with_path(super::config_dir().join("preferences.json"))
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content =
            fs::read_to_string(&self.path).context("Failed to read preferences file")?;

        serde_json::from_str(&content).context("Failed to parse preferences file")
    }
}

impl Default for JsonPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut values = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable preferences: {:#}", e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }

        let content =
            serde_json::to_string_pretty(&values).context("Failed to serialize preferences")?;

        fs::write(&self.path, content).context("Failed to write preferences file")?;

        Ok(())
    }
}

/// Session-only storage.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| anyhow!("Failed to lock preferences: {}", e))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .map_err(|e| anyhow!("Failed to lock preferences: {}", e))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
