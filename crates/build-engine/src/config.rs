//! Build Configuration
//!
//! Defines build settings and variants.

use std::path::PathBuf;

use quest_build_core::{BUILDS_DIR_NAME, DEFAULT_OUTPUT_NAME, DEVELOPMENT_OUTPUT_NAME};

/// Build variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildVariant {
    #[default]
    Release,
    /// Development player with script debugging
    Development,
}

impl BuildVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Release => "release",
            BuildVariant::Development => "development",
        }
    }

    /// Editor method invoked through `-executeMethod`
    pub fn entry_point(&self) -> &'static str {
        match self {
            BuildVariant::Release => "BuildCommand.BuildAndroid",
            BuildVariant::Development => "BuildCommand.BuildAndroidDevelopment",
        }
    }

    pub fn default_output_name(&self) -> &'static str {
        match self {
            BuildVariant::Release => DEFAULT_OUTPUT_NAME,
            BuildVariant::Development => DEVELOPMENT_OUTPUT_NAME,
        }
    }
}

/// Build configuration
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Unity editor executable
    pub editor_path: PathBuf,

    /// Unity project root directory
    pub project_dir: PathBuf,

    /// Package file name inside the builds directory
    pub output_name: String,

    /// Build variant
    pub variant: BuildVariant,

    /// Install and launch on the connected headset after building
    pub run_on_device: bool,

    /// File receiving the editor log
    pub editor_log: Option<PathBuf>,
}

impl BuildConfig {
    pub fn new(editor_path: PathBuf, project_dir: PathBuf) -> Self {
        Self {
            editor_path,
            project_dir,
            output_name: BuildVariant::default().default_output_name().to_string(),
            variant: BuildVariant::default(),
            run_on_device: false,
            editor_log: None,
        }
    }

    /// Directory receiving built packages
    pub fn builds_dir(&self) -> PathBuf {
        self.project_dir.join(BUILDS_DIR_NAME)
    }

    /// Full path of the package Unity is asked to write
    pub fn output_path(&self) -> PathBuf {
        self.builds_dir().join(&self.output_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let mut config = BuildConfig::new("/unity".into(), "/work/DecartAI-Quest-Unity".into());
        assert_eq!(
            config.output_path(),
            PathBuf::from("/work/DecartAI-Quest-Unity/Builds/QuestAI.apk")
        );

        config.output_name = "Nightly.apk".into();
        assert_eq!(
            config.output_path(),
            PathBuf::from("/work/DecartAI-Quest-Unity/Builds/Nightly.apk")
        );
    }

    #[test]
    fn test_variant_entry_points() {
        assert_eq!(BuildVariant::Release.entry_point(), "BuildCommand.BuildAndroid");
        assert_eq!(
            BuildVariant::Development.entry_point(),
            "BuildCommand.BuildAndroidDevelopment"
        );
        assert_eq!(BuildVariant::Development.default_output_name(), "QuestAI_Development.apk");
    }
}
