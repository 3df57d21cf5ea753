//! Command line arguments

use std::path::PathBuf;
use clap::Parser;

use quest_build_core::Settings;
use quest_build_engine::BuildVariant;

use crate::commands::{BuildCommand, CreateScriptCommand, EditorSource};

/// Build automation for the Meta Quest 3 AI transformation app
#[derive(Debug, Parser)]
#[command(name = "quest-build", version)]
pub struct Cli {
    /// Path to Unity executable
    #[arg(long, value_name = "PATH")]
    pub unity_path: Option<PathBuf>,

    /// Path to Unity project folder
    #[arg(long, value_name = "PATH")]
    pub project_path: Option<PathBuf>,

    /// Output APK filename [default: QuestAI.apk]
    #[arg(long, value_name = "FILENAME")]
    pub output: Option<String>,

    /// Build and install on connected Quest device
    #[arg(long)]
    pub build_and_run: bool,

    /// Create build script only (don't build)
    #[arg(long)]
    pub create_script: bool,

    /// Build a development player with script debugging
    #[arg(long)]
    pub development: bool,

    /// Write the Unity editor log to this file
    #[arg(long, value_name = "FILE")]
    pub editor_log: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build command, with flags taking precedence over `settings`
    pub fn build_command(&self, settings: &Settings) -> BuildCommand {
        let variant = if self.development {
            BuildVariant::Development
        } else {
            BuildVariant::Release
        };

        BuildCommand {
            editor: self.editor_source(settings),
            project_path: self.project_path.clone().or_else(|| settings.project_path.clone()),
            output: self.output.clone().or_else(|| settings.output.clone()),
            variant,
            build_and_run: self.build_and_run,
            editor_log: self.editor_log.clone().or_else(|| settings.editor_log.clone()),
        }
    }

    /// Script-only command
    pub fn create_script_command(&self, settings: &Settings) -> CreateScriptCommand {
        CreateScriptCommand {
            editor: self.editor_source(settings),
            project_path: self.project_path.clone().or_else(|| settings.project_path.clone()),
        }
    }

    fn editor_source(&self, settings: &Settings) -> EditorSource {
        EditorSource {
            unity_path: self.unity_path.clone().or_else(|| settings.unity_path.clone()),
            editor_roots: settings.editor_roots.clone(),
            version_prefix: settings.version_prefix().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quest-build"]).unwrap();
        assert!(!cli.build_and_run);
        assert!(!cli.create_script);

        let command = cli.build_command(&Settings::default());
        assert_eq!(command.output_name(), "QuestAI.apk");
        assert_eq!(command.variant, BuildVariant::Release);
        assert_eq!(command.editor.version_prefix, "6");
        assert!(command.editor.editor_roots.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "quest-build",
            "--unity-path",
            "/opt/Unity",
            "--project-path",
            "/work/Quest",
            "--output",
            "Nightly.apk",
            "--build-and-run",
            "--create-script",
        ])
        .unwrap();

        assert_eq!(cli.unity_path, Some(PathBuf::from("/opt/Unity")));
        assert_eq!(cli.project_path, Some(PathBuf::from("/work/Quest")));
        assert!(cli.build_and_run);
        assert!(cli.create_script);

        let command = cli.build_command(&Settings::default());
        assert_eq!(command.output_name(), "Nightly.apk");
        assert!(command.build_and_run);
    }

    #[test]
    fn test_development_default_name() {
        let cli = Cli::try_parse_from(["quest-build", "--development"]).unwrap();
        let command = cli.build_command(&Settings::default());
        assert_eq!(command.variant, BuildVariant::Development);
        assert_eq!(command.output_name(), "QuestAI_Development.apk");
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            unity_path: Some(PathBuf::from("/settings/Unity")),
            project_path: Some(PathBuf::from("/settings/Quest")),
            output: Some("FromSettings.apk".into()),
            version_prefix: Some("2022".into()),
            editor_log: None,
            editor_roots: Some(vec![PathBuf::from("/srv/unity")]),
        };
        let cli = Cli::try_parse_from(["quest-build", "--unity-path", "/cli/Unity"]).unwrap();

        let command = cli.build_command(&settings);
        assert_eq!(command.editor.unity_path, Some(PathBuf::from("/cli/Unity")));
        assert_eq!(command.editor.editor_roots, Some(vec![PathBuf::from("/srv/unity")]));
        assert_eq!(command.project_path, Some(PathBuf::from("/settings/Quest")));
        assert_eq!(command.output_name(), "FromSettings.apk");
        assert_eq!(command.editor.version_prefix, "2022");

        let script = cli.create_script_command(&settings);
        assert_eq!(script.project_path, Some(PathBuf::from("/settings/Quest")));
        assert_eq!(script.editor.unity_path, Some(PathBuf::from("/cli/Unity")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["quest-build", "--release"]).is_err());
    }
}
