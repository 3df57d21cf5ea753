//! Quest Build Engine
//!
//! Writes the editor-side build entry point into the Unity project and
//! drives Unity in batch mode to produce the Android package.

pub mod config;
pub mod runner;
pub mod trigger;

pub use config::{BuildConfig, BuildVariant};
pub use runner::{BuildInvocation, BuildOutcome, BuildRunner};
pub use trigger::{write_trigger_script, TRIGGER_SCRIPT};

use std::path::PathBuf;

/// Errors that stop a build before Unity is started.
///
/// A Unity run that fails is reported through [`BuildOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to write build script {path:?}: {source}")]
    TriggerScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create build output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
