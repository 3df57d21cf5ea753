//! Unity Location
//!
//! Finds the two things every build needs before anything is written:
//! - the Unity editor executable
//! - the Unity project directory
//!
//! Failing to find either is fatal for the run.

pub mod editor;
pub mod project;

pub use editor::{EditorLocator, HostPlatform};
pub use project::ProjectLocator;

use std::path::PathBuf;

/// Discovery errors
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error(
        "Unity installation not found (searched: {}). Please specify path with --unity-path",
        display_paths(.searched)
    )]
    EditorNotFound { searched: Vec<PathBuf> },
    #[error("Unity project not found at {0:?}. Please specify with --project-path")]
    ProjectNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no install roots for this platform".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_not_found_lists_roots() {
        let err = LocateError::EditorNotFound {
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        let message = err.to_string();
        assert!(message.contains("/a, /b"));
        assert!(message.contains("--unity-path"));
    }

    #[test]
    fn test_editor_not_found_without_roots() {
        let err = LocateError::EditorNotFound { searched: Vec::new() };
        assert!(err.to_string().contains("no install roots"));
    }
}
