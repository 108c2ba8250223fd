//! Persisted settings
//!
//! A small key-value blob on disk; key names are camelCase to stay
//! compatible with the settings the browser front end stores. Loading a
//! missing file yields defaults; saving is an explicit, whole-blob write.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::{LlmConfig, Provider};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// UI accessibility toggles persisted alongside the API settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityPrefs {
    pub high_contrast: bool,
    pub large_text: bool,
    pub reduced_motion: bool,
    pub screen_reader_optimized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub api_key: String,
    pub api_endpoint: String,
    pub api_model: String,
    pub api_provider: Provider,
    pub accessibility: AccessibilityPrefs,
}

impl Default for Settings {
    fn default() -> Self {
        let config = LlmConfig::default();
        Self {
            api_key: config.api_key,
            api_endpoint: config.endpoint,
            api_model: config.model,
            api_provider: config.provider,
            accessibility: AccessibilityPrefs::default(),
        }
    }
}

impl Settings {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_endpoint: config.endpoint.clone(),
            api_model: config.model.clone(),
            api_provider: config.provider,
            accessibility: AccessibilityPrefs::default(),
        }
    }

    pub fn to_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: self.api_key.clone(),
            endpoint: self.api_endpoint.clone(),
            model: self.api_model.clone(),
            provider: self.api_provider,
        }
    }
}

/// File-backed settings store with explicit load/save
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, falling back to defaults when no file exists yet
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the whole settings blob
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
