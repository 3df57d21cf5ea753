//! Editor Detection
//!
//! Scans Unity Hub install roots for an editor whose version folder starts
//! with the configured major version.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use quest_build_core::DEFAULT_VERSION_PREFIX;

use crate::LocateError;

/// Host operating systems with known Unity Hub layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

impl HostPlatform {
    /// Platform this binary runs on, if Unity Hub supports it
    pub fn current() -> Option<Self> {
        match std::env::consts::OS {
            "windows" => Some(HostPlatform::Windows),
            "macos" => Some(HostPlatform::MacOs),
            "linux" => Some(HostPlatform::Linux),
            _ => None,
        }
    }

    /// Unity Hub editor roots, in search order
    pub fn install_roots(&self) -> Vec<PathBuf> {
        match self {
            HostPlatform::Windows => vec![
                PathBuf::from(r"C:\Program Files\Unity\Hub\Editor"),
                PathBuf::from(r"C:\Program Files (x86)\Unity\Hub\Editor"),
            ],
            HostPlatform::MacOs => vec![PathBuf::from("/Applications/Unity/Hub/Editor")],
            HostPlatform::Linux => {
                let mut roots = Vec::new();
                if let Some(home) = dirs::home_dir() {
                    roots.push(home.join("Unity").join("Hub").join("Editor"));
                }
                roots.push(PathBuf::from("/opt/unity/Hub/Editor"));
                roots
            }
        }
    }

    /// Executable location relative to a version folder
    pub fn executable_in(&self, version_dir: &Path) -> PathBuf {
        match self {
            HostPlatform::Windows => version_dir.join("Editor").join("Unity.exe"),
            HostPlatform::MacOs => version_dir
                .join("Unity.app")
                .join("Contents")
                .join("MacOS")
                .join("Unity"),
            HostPlatform::Linux => version_dir.join("Editor").join("Unity"),
        }
    }
}

/// Unity editor locator
#[derive(Debug, Clone)]
pub struct EditorLocator {
    platform: Option<HostPlatform>,
    roots: Vec<PathBuf>,
    version_prefix: String,
}

impl EditorLocator {
    /// Locator over the install roots of the running host
    pub fn for_host() -> Self {
        match HostPlatform::current() {
            Some(platform) => Self::for_platform(platform),
            None => Self {
                platform: None,
                roots: Vec::new(),
                version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
            },
        }
    }

    /// Locator over the default install roots of `platform`
    pub fn for_platform(platform: HostPlatform) -> Self {
        Self::with_roots(platform, platform.install_roots())
    }

    /// Locator over custom roots using the layout of the running host
    pub fn for_host_with_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            platform: HostPlatform::current(),
            roots,
            version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
        }
    }

    /// Locator over custom roots using the layout of `platform`
    pub fn with_roots(platform: HostPlatform, roots: Vec<PathBuf>) -> Self {
        Self {
            platform: Some(platform),
            roots,
            version_prefix: DEFAULT_VERSION_PREFIX.to_string(),
        }
    }

    /// Set the version folder prefix
    pub fn with_version_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.version_prefix = prefix.into();
        self
    }

    /// Use `explicit` as given, otherwise discover an installed editor.
    ///
    /// A caller-supplied path is not checked for existence.
    pub fn resolve(&self, explicit: Option<PathBuf>) -> Result<PathBuf, LocateError> {
        match explicit {
            Some(path) => {
                debug!("Using Unity editor from arguments: {:?}", path);
                Ok(path)
            }
            None => self.discover(),
        }
    }

    /// Search the install roots for an editor executable.
    ///
    /// Version folders are visited in directory listing order and the first
    /// one holding an executable wins.
    pub fn discover(&self) -> Result<PathBuf, LocateError> {
        info!("Detecting Unity {}.x editor...", self.version_prefix);

        let platform = match self.platform {
            Some(platform) => platform,
            None => {
                return Err(LocateError::EditorNotFound { searched: Vec::new() });
            }
        };

        for root in &self.roots {
            if !root.is_dir() {
                debug!("Install root {:?} does not exist", root);
                continue;
            }

            let entries = match std::fs::read_dir(root) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("Cannot list {:?}: {}", root, e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let name = entry.file_name();
                if !name.to_string_lossy().starts_with(&self.version_prefix) {
                    continue;
                }

                let executable = platform.executable_in(&entry.path());
                if executable.is_file() {
                    info!("Found Unity editor at {:?}", executable);
                    return Ok(executable);
                }
                debug!("Version folder {:?} has no editor executable", entry.path());
            }
        }

        Err(LocateError::EditorNotFound {
            searched: self.roots.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ALL_PLATFORMS: [HostPlatform; 3] =
        [HostPlatform::Windows, HostPlatform::MacOs, HostPlatform::Linux];

    fn install_editor(root: &Path, platform: HostPlatform, version: &str) -> PathBuf {
        let executable = platform.executable_in(&root.join(version));
        fs::create_dir_all(executable.parent().unwrap()).unwrap();
        fs::write(&executable, b"").unwrap();
        executable
    }

    #[test]
    fn test_discovers_editor_on_every_platform() {
        for platform in ALL_PLATFORMS {
            let dir = tempfile::tempdir().unwrap();
            let expected = install_editor(dir.path(), platform, "6000.0.23f1");

            let locator = EditorLocator::with_roots(platform, vec![dir.path().to_path_buf()]);
            assert_eq!(locator.discover().unwrap(), expected, "{:?}", platform);
        }
    }

    #[test]
    fn test_skips_missing_roots() {
        let dir = tempfile::tempdir().unwrap();
        let expected = install_editor(dir.path(), HostPlatform::Linux, "6000.1.0f1");

        let locator = EditorLocator::with_roots(
            HostPlatform::Linux,
            vec![dir.path().join("absent"), dir.path().to_path_buf()],
        );
        assert_eq!(locator.discover().unwrap(), expected);
    }

    #[test]
    fn test_ignores_other_major_versions() {
        let dir = tempfile::tempdir().unwrap();
        install_editor(dir.path(), HostPlatform::Windows, "2022.3.10f1");

        let locator = EditorLocator::with_roots(HostPlatform::Windows, vec![dir.path().to_path_buf()]);
        let err = locator.discover().unwrap_err();
        assert!(matches!(err, LocateError::EditorNotFound { ref searched } if searched.len() == 1));
    }

    #[test]
    fn test_version_folder_without_executable() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("6000.0.1f1").join("Editor")).unwrap();

        let locator = EditorLocator::with_roots(HostPlatform::Linux, vec![dir.path().to_path_buf()]);
        assert!(matches!(locator.discover(), Err(LocateError::EditorNotFound { .. })));
    }

    #[test]
    fn test_host_layout_with_custom_roots() {
        let Some(platform) = HostPlatform::current() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let expected = install_editor(dir.path(), platform, "6000.2.0f1");

        let locator = EditorLocator::for_host_with_roots(vec![dir.path().to_path_buf()]);
        assert_eq!(locator.discover().unwrap(), expected);
    }

    #[test]
    fn test_no_roots() {
        let locator = EditorLocator::with_roots(HostPlatform::MacOs, Vec::new());
        assert!(matches!(locator.discover(), Err(LocateError::EditorNotFound { .. })));
    }

    #[test]
    fn test_custom_version_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let expected = install_editor(dir.path(), HostPlatform::Linux, "2022.3.10f1");

        let locator = EditorLocator::with_roots(HostPlatform::Linux, vec![dir.path().to_path_buf()])
            .with_version_prefix("2022");
        assert_eq!(locator.discover().unwrap(), expected);
    }

    #[test]
    fn test_explicit_path_is_not_checked() {
        let locator = EditorLocator::with_roots(HostPlatform::Linux, Vec::new());
        let explicit = PathBuf::from("/nowhere/Unity");
        assert_eq!(locator.resolve(Some(explicit.clone())).unwrap(), explicit);
    }

    #[test]
    fn test_install_roots() {
        assert_eq!(HostPlatform::Windows.install_roots().len(), 2);
        assert_eq!(
            HostPlatform::MacOs.install_roots(),
            vec![PathBuf::from("/Applications/Unity/Hub/Editor")]
        );
        assert!(HostPlatform::Linux
            .install_roots()
            .contains(&PathBuf::from("/opt/unity/Hub/Editor")));
    }
}
