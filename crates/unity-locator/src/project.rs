//! Project Detection
//!
//! The Unity project sits next to the tool, either beside it or one level
//! up when the tool is run from the documentation folder.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::LocateError;

/// Folder name of the Unity project
pub const PROJECT_DIR_NAME: &str = "DecartAI-Quest-Unity";

/// Folder the tool may be shipped in, below the repository root
pub const DOCS_DIR_NAME: &str = "Documentation";

/// Unity project locator
#[derive(Debug, Clone)]
pub struct ProjectLocator {
    anchor_dir: PathBuf,
}

impl ProjectLocator {
    /// Locator anchored at `anchor_dir`
    pub fn new(anchor_dir: impl Into<PathBuf>) -> Self {
        Self {
            anchor_dir: anchor_dir.into(),
        }
    }

    /// Locator anchored at the directory holding the running executable
    pub fn from_current_exe() -> Result<Self, LocateError> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(dir))
    }

    /// Project path inferred from the anchor directory
    pub fn inferred_path(&self) -> PathBuf {
        let base = match (self.anchor_dir.file_name(), self.anchor_dir.parent()) {
            (Some(name), Some(parent)) if name == DOCS_DIR_NAME => parent,
            _ => self.anchor_dir.as_path(),
        };
        base.join(PROJECT_DIR_NAME)
    }

    /// Use `explicit` or the inferred path; either way it must exist.
    ///
    /// The returned path is absolute.
    pub fn resolve(&self, explicit: Option<PathBuf>) -> Result<PathBuf, LocateError> {
        match explicit {
            Some(path) => Self::resolve_explicit(path),
            None => Self::existing(self.inferred_path()),
        }
    }

    /// Check a caller-supplied project path; no anchor is involved.
    pub fn resolve_explicit(path: PathBuf) -> Result<PathBuf, LocateError> {
        debug!("Using Unity project from arguments: {:?}", path);
        Self::existing(path)
    }

    fn existing(candidate: PathBuf) -> Result<PathBuf, LocateError> {
        if !candidate.exists() {
            return Err(LocateError::ProjectNotFound(candidate));
        }

        let project = std::path::absolute(&candidate)?;
        info!("Using Unity project at {:?}", project);
        Ok(project)
    }
}
