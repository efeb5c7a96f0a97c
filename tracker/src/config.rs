//! # Configuration
//!
//! Resolves where the tracker keeps its data and which optional features are
//! on. Settings come from, in order of precedence:
//!
//! 1. an explicit data directory (the `--data-dir` flag)
//! 2. the `PREGNANCY_TRACKER_DATA_DIR` environment variable
//! 3. the platform data directory (`~/.local/share/Pregnancy Tracker` on Linux)
//!
//! Inside the data directory an optional `tracker_config.yaml` toggles features:
//!
//! ```yaml
//! features:
//!   with_notes: true
//!   with_calendar: false
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::TrackerFeatures;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "PREGNANCY_TRACKER_DATA_DIR";

/// Name of the settings file inside the data directory
pub const CONFIG_FILE_NAME: &str = "tracker_config.yaml";

const DEFAULT_DIR_NAME: &str = "Pregnancy Tracker";
const FALLBACK_DIR_NAME: &str = "pregnancy-tracker-data";

/// Contents of `tracker_config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub features: TrackerFeatures,
}

/// Fully resolved tracker configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub data_directory: PathBuf,
    pub features: TrackerFeatures,
}

impl TrackerConfig {
    /// Resolve the data directory and read the settings file inside it
    pub fn load(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let env_dir = std::env::var(DATA_DIR_ENV).ok();
        let data_directory = resolve_data_directory(data_dir_override, env_dir);
        Self::load_from(data_directory)
    }

    /// Read the settings file in a known data directory
    pub fn load_from(data_directory: PathBuf) -> Result<Self> {
        let settings = read_settings(&data_directory.join(CONFIG_FILE_NAME))?;
        info!("Using data directory {}", data_directory.display());

        Ok(Self {
            data_directory,
            features: settings.features,
        })
    }
}

/// Pick the data directory: explicit override, then environment, then platform default
pub fn resolve_data_directory(explicit: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Some(dir) = env_value.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(dir.trim());
    }

    match dirs::data_dir() {
        Some(dir) => dir.join(DEFAULT_DIR_NAME),
        None => PathBuf::from(FALLBACK_DIR_NAME),
    }
}

/// Read `tracker_config.yaml`; a missing file means defaults
fn read_settings(path: &Path) -> Result<FileSettings> {
    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return Ok(FileSettings::default());
    }

    let yaml_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if yaml_content.trim().is_empty() {
        return Ok(FileSettings::default());
    }

    let settings: FileSettings = serde_yaml::from_str(&yaml_content)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}
