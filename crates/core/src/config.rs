//! Tool Settings
//!
//! Optional `config.toml` holding defaults for the command line:
//! - Unity editor and project locations
//! - Unity version prefix used during discovery
//! - Package file name and editor log location
//!
//! Command line flags always win over values read from here.

use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{QuestBuildError, Result};
use crate::DEFAULT_VERSION_PREFIX;

/// Settings file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the Unity executable
    pub unity_path: Option<PathBuf>,
    /// Path to the Unity project folder
    pub project_path: Option<PathBuf>,
    /// Package file name
    pub output: Option<String>,
    /// Unity major version searched for during discovery
    pub version_prefix: Option<String>,
    /// File receiving the editor log
    pub editor_log: Option<PathBuf>,
    /// Unity Hub install roots searched instead of the platform defaults
    pub editor_roots: Option<Vec<PathBuf>>,
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME))
    }

    /// Get the default settings file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one the default file is read
    /// when present, otherwise built-in defaults are used.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(QuestBuildError::SettingsNotFound(path.to_path_buf()));
                }
                Self::load_from(path).await
            }
            None => match Self::config_file() {
                Some(path) if path.exists() => Self::load_from(&path).await,
                _ => {
                    debug!("No settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a settings file
    pub async fn load_from(path: &Path) -> Result<Self> {
        info!("Loading settings from {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&contents)
    }

    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        if let Some(prefix) = &settings.version_prefix {
            if prefix.is_empty() {
                return Err(QuestBuildError::Config("version_prefix must not be empty".into()));
            }
        }
        Ok(settings)
    }

    /// Version prefix, falling back to the supported Unity major version
    pub fn version_prefix(&self) -> &str {
        self.version_prefix.as_deref().unwrap_or(DEFAULT_VERSION_PREFIX)
    }
}
