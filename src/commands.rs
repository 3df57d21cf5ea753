//! CLI commands for quest-build
//!
//! Both commands resolve the editor and then the project before touching
//! anything; a discovery failure is returned as an error before the build
//! script is written or Unity is started.

use std::io::Write;
use std::path::PathBuf;
use anyhow::Result;
use tracing::info;

use quest_build_engine::{write_trigger_script, BuildConfig, BuildRunner, BuildVariant};
use quest_build_unity_locator::{EditorLocator, ProjectLocator};

/// Where to find the Unity editor
#[derive(Debug, Clone)]
pub struct EditorSource {
    /// Editor executable, used without checks
    pub unity_path: Option<PathBuf>,
    /// Install roots replacing the platform defaults
    pub editor_roots: Option<Vec<PathBuf>>,
    /// Unity major version searched for
    pub version_prefix: String,
}

impl EditorSource {
    fn resolve(&self) -> Result<PathBuf> {
        let locator = match &self.editor_roots {
            Some(roots) => EditorLocator::for_host_with_roots(roots.clone()),
            None => EditorLocator::for_host(),
        };
        let editor = locator
            .with_version_prefix(self.version_prefix.as_str())
            .resolve(self.unity_path.clone())?;
        info!("Unity: {:?}", editor);
        Ok(editor)
    }
}

/// Build command options
#[derive(Debug, Clone)]
pub struct BuildCommand {
    pub editor: EditorSource,
    pub project_path: Option<PathBuf>,
    pub output: Option<String>,
    pub variant: BuildVariant,
    pub build_and_run: bool,
    pub editor_log: Option<PathBuf>,
}

impl BuildCommand {
    /// Package file name, falling back to the variant default
    pub fn output_name(&self) -> &str {
        self.output
            .as_deref()
            .unwrap_or_else(|| self.variant.default_output_name())
    }

    /// Execute the build command.
    ///
    /// Returns whether Unity reported success.
    pub async fn execute<W: Write>(&self, out: &mut W) -> Result<bool> {
        let editor = self.editor.resolve()?;
        let project = resolve_project(self.project_path.clone())?;

        write_trigger_script(&project)?;

        let mut config = BuildConfig::new(editor, project);
        config.output_name = self.output_name().to_string();
        config.variant = self.variant;
        config.run_on_device = self.build_and_run;
        config.editor_log = self.editor_log.clone();

        let outcome = BuildRunner::new(config).build().await?;
        outcome.report(out)?;
        Ok(outcome.is_success())
    }
}

/// Script-only command
#[derive(Debug, Clone)]
pub struct CreateScriptCommand {
    pub editor: EditorSource,
    pub project_path: Option<PathBuf>,
}

impl CreateScriptCommand {
    /// Write the build script and return where it went.
    ///
    /// The editor must still be resolvable even though it is not run.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<PathBuf> {
        self.editor.resolve()?;
        let project = resolve_project(self.project_path.clone())?;
        let script = write_trigger_script(&project)?;

        writeln!(out, "Created build script at: {}", script.display())?;
        writeln!(out, "✓ Build script created successfully")?;
        Ok(script)
    }
}

fn resolve_project(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let project = match explicit {
        Some(path) => ProjectLocator::resolve_explicit(path)?,
        None => ProjectLocator::from_current_exe()?.resolve(None)?,
    };
    info!("Project: {:?}", project);
    Ok(project)
}
