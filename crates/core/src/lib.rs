//! Quest Build Core - settings and shared constants
//!
//! Everything the locator, the build engine and the command line agree on
//! lives here: default names, the output-path environment variable and the
//! optional settings file.

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{QuestBuildError, Result};

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const APP_NAME: &str = "quest-build";

/// Package file name used when the caller does not pick one
pub const DEFAULT_OUTPUT_NAME: &str = "QuestAI.apk";

/// Package file name for development builds
pub const DEVELOPMENT_OUTPUT_NAME: &str = "QuestAI_Development.apk";

/// Environment variable carrying the package destination into the editor
pub const OUTPUT_PATH_ENV: &str = "BUILD_OUTPUT_PATH";

/// Subdirectory of the project that receives built packages
pub const BUILDS_DIR_NAME: &str = "Builds";

/// Unity major version searched for under the Hub install roots
pub const DEFAULT_VERSION_PREFIX: &str = "6";
