//! Error types for quest-build settings handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading tool settings
#[derive(Error, Debug)]
pub enum QuestBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings file not found: {0:?}")]
    SettingsNotFound(PathBuf),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, QuestBuildError>;

impl QuestBuildError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            QuestBuildError::Io(e) => format!("File operation failed: {}", e),
            QuestBuildError::SettingsNotFound(path) => {
                format!("Settings file {} does not exist", path.display())
            }
            QuestBuildError::TomlParse(e) => format!("Settings file is not valid TOML: {}", e),
            _ => self.to_string(),
        }
    }
}
