//! Editor Build Script
//!
//! Unity can only run static methods that exist in the project, so the
//! entry points called through `-executeMethod` are written into the
//! project's `Assets/Editor` folder before every build.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::BuildError;

/// Location of the script, relative to the project root
pub const TRIGGER_SCRIPT_DIR: [&str; 2] = ["Assets", "Editor"];

/// Script file name
pub const TRIGGER_SCRIPT_NAME: &str = "BuildCommand.cs";

/// Editor script declaring `BuildCommand.BuildAndroid` and
/// `BuildCommand.BuildAndroidDevelopment`.
///
/// Both read the package path from `BUILD_OUTPUT_PATH` and exit the editor
/// with status 1 when the player build fails.
pub const TRIGGER_SCRIPT: &str = r#"using System;
using System.IO;
using UnityEditor;
using UnityEditor.Build.Reporting;
using UnityEngine;

public class BuildCommand
{
    const string MainScene = "Assets/Samples/DecartAI-Quest/DecartAI-Main.unity";

    public static void BuildAndroid()
    {
        Build("QuestAI.apk", BuildOptions.None);
    }

    public static void BuildAndroidDevelopment()
    {
        Build("QuestAI_Development.apk", BuildOptions.Development | BuildOptions.AllowDebugging);
    }

    static void Build(string defaultName, BuildOptions options)
    {
        string outputPath = Environment.GetEnvironmentVariable("BUILD_OUTPUT_PATH");
        if (string.IsNullOrEmpty(outputPath))
        {
            outputPath = Path.Combine(Application.dataPath, "..", "Builds", defaultName);
        }

        string buildDir = Path.GetDirectoryName(outputPath);
        if (!string.IsNullOrEmpty(buildDir) && !Directory.Exists(buildDir))
        {
            Directory.CreateDirectory(buildDir);
        }

        if (Array.IndexOf(Environment.GetCommandLineArgs(), "-buildAndRun") >= 0)
        {
            options |= BuildOptions.AutoRunPlayer;
        }

        BuildPlayerOptions buildPlayerOptions = new BuildPlayerOptions
        {
            scenes = new[] { MainScene },
            locationPathName = outputPath,
            target = BuildTarget.Android,
            options = options
        };

        Debug.Log($"Building to: {outputPath}");
        BuildReport report = BuildPipeline.BuildPlayer(buildPlayerOptions);

        if (report.summary.result == BuildResult.Succeeded)
        {
            Debug.Log($"Build succeeded: {outputPath} ({report.summary.totalSize} bytes)");
        }
        else
        {
            Debug.LogError($"Build failed with {report.summary.totalErrors} errors");
            EditorApplication.Exit(1);
        }
    }
}
"#;

/// Path the script is written to inside `project_dir`
pub fn trigger_script_path(project_dir: &Path) -> PathBuf {
    TRIGGER_SCRIPT_DIR
        .iter()
        .fold(project_dir.to_path_buf(), |path, part| path.join(part))
        .join(TRIGGER_SCRIPT_NAME)
}

/// Write the build script into the project, replacing any previous copy
pub fn write_trigger_script(project_dir: &Path) -> Result<PathBuf, BuildError> {
    let script_path = trigger_script_path(project_dir);
    let wrap = |source| BuildError::TriggerScript {
        path: script_path.clone(),
        source,
    };

    if let Some(editor_dir) = script_path.parent() {
        std::fs::create_dir_all(editor_dir).map_err(wrap)?;
    }
    std::fs::write(&script_path, TRIGGER_SCRIPT).map_err(wrap)?;

    info!("Created build script at: {:?}", script_path);
    Ok(script_path)
}
