//! Quest Build - headless Unity builds for the Quest AI app
//!
//! Finds a Unity 6 editor and the `DecartAI-Quest-Unity` project, drops
//! the editor build script into the project and runs Unity in batch mode
//! to produce the Android package.
//!
//! ## Architecture
//!
//! - `quest-build-core`: settings file, shared constants
//! - `quest-build-unity-locator`: editor and project discovery
//! - `quest-build-engine`: build script emission and the Unity run

#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod commands;

pub use quest_build_core as common;
pub use quest_build_unity_locator as locator;
pub use quest_build_engine as engine;

pub use cli::Cli;
pub use commands::{BuildCommand, CreateScriptCommand, EditorSource};
