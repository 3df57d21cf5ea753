//! Build Runner
//!
//! Launches Unity in batch mode and turns its exit status into a
//! [`BuildOutcome`].

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, error, info};

use quest_build_core::OUTPUT_PATH_ENV;

use crate::{BuildConfig, BuildError};

/// Target platform passed to `-buildTarget`
pub const BUILD_TARGET: &str = "Android";

/// A fully assembled Unity command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
    /// Unity executable
    pub program: PathBuf,
    /// Command line arguments
    pub args: Vec<OsString>,
    /// Variables set on top of the inherited environment
    pub envs: Vec<(String, OsString)>,
}

impl BuildInvocation {
    /// Assemble the batch mode command line for `config`
    pub fn from_config(config: &BuildConfig) -> Self {
        let mut args: Vec<OsString> = vec![
            "-quit".into(),
            "-batchmode".into(),
            "-nographics".into(),
            "-projectPath".into(),
            config.project_dir.clone().into_os_string(),
            "-buildTarget".into(),
            BUILD_TARGET.into(),
            "-executeMethod".into(),
            config.variant.entry_point().into(),
        ];

        if config.run_on_device {
            args.push("-buildAndRun".into());
        }

        if let Some(ref log) = config.editor_log {
            args.push("-logFile".into());
            args.push(log.clone().into_os_string());
        }

        let envs = vec![(
            OUTPUT_PATH_ENV.to_string(),
            config.output_path().into_os_string(),
        )];

        Self {
            program: config.editor_path.clone(),
            args,
            envs,
        }
    }

    /// Child process command; the parent environment is left untouched
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

/// Result of one Unity run
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// Unity exited with status 0
    Succeeded {
        output_path: PathBuf,
        duration_secs: f64,
    },
    /// Unity exited with a non-zero status or was killed by a signal
    Failed {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// Unity could not be started or waited on
    LaunchFailed { message: String },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded { .. })
    }

    /// Print the outcome for the user, including captured output on failure
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            BuildOutcome::Succeeded {
                output_path,
                duration_secs,
            } => {
                writeln!(out, "\n✓ Build completed successfully in {:.1}s!", duration_secs)?;
                writeln!(out, "APK location: {}", output_path.display())?;
            }
            BuildOutcome::Failed {
                exit_code,
                stdout,
                stderr,
            } => {
                match exit_code {
                    Some(code) => writeln!(out, "\n✗ Build failed (exit code {})!", code)?,
                    None => writeln!(out, "\n✗ Build failed (terminated by signal)!")?,
                }
                writeln!(out, "\nStdout:")?;
                writeln!(out, "{}", stdout)?;
                writeln!(out, "\nStderr:")?;
                writeln!(out, "{}", stderr)?;
            }
            BuildOutcome::LaunchFailed { message } => {
                writeln!(out, "\n✗ Build error: {}", message)?;
            }
        }
        Ok(())
    }
}

/// Build runner that drives one Unity batch build
pub struct BuildRunner {
    config: BuildConfig,
}

impl BuildRunner {
    /// Create a new build runner
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Command line this runner will launch
    pub fn invocation(&self) -> BuildInvocation {
        BuildInvocation::from_config(&self.config)
    }

    /// Run the build.
    ///
    /// Only failing to prepare the builds directory is an error. Anything
    /// that goes wrong with Unity itself ends up in the returned outcome.
    pub async fn build(&self) -> Result<BuildOutcome, BuildError> {
        let builds_dir = self.config.builds_dir();
        std::fs::create_dir_all(&builds_dir).map_err(|source| BuildError::OutputDir {
            path: builds_dir.clone(),
            source,
        })?;

        let output_path = self.config.output_path();
        let invocation = self.invocation();

        info!("Building Unity project ({})...", self.config.variant.as_str());
        info!("Unity: {:?}", invocation.program);
        info!("Project: {:?}", self.config.project_dir);
        info!("Output: {:?}", output_path);
        debug!("Running: {:?} {:?}", invocation.program, invocation.args);

        let start = Instant::now();
        let output = match invocation.command().output().await {
            Ok(output) => output,
            Err(e) => {
                error!("Failed to launch Unity: {}", e);
                return Ok(BuildOutcome::LaunchFailed {
                    message: e.to_string(),
                });
            }
        };
        let duration_secs = start.elapsed().as_secs_f64();

        if output.status.success() {
            info!("Unity build completed in {:.2}s", duration_secs);
            Ok(BuildOutcome::Succeeded {
                output_path,
                duration_secs,
            })
        } else {
            error!("Unity exited with {}", output.status);
            Ok(BuildOutcome::Failed {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
