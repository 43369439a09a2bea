use std::{fs, path::PathBuf, sync::Mutex};

use serde::{Deserialize, Serialize};

use raidexplorer_core::{errors::Error, sections::SectionToggles, Result};

/// Persisted user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub toggles: SectionToggles,
    pub install_folder: Option<String>,
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn load(&self) -> Result<Settings> {
        let _guard = self.guard()?;
        self.load_locked()
    }

    /// Applies `op` to the stored settings and writes them back.
    pub fn update<F>(&self, op: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let _guard = self.guard()?;
        let mut settings = self.load_locked()?;
        op(&mut settings);
        self.persist_locked(&settings)?;
        Ok(settings)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::Settings("Settings file lock poisoned".into()))
    }

    fn load_locked(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(Settings::default());
        }
        serde_json::from_slice(&raw)
            .map_err(|e| Error::Settings(format!("Failed to read {}: {}", self.path.display(), e)))
    }

    fn persist_locked(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
