//! Top-level run: settings, command dispatch and exit status.

use std::io::Write;
use anyhow::{anyhow, Result};
use tracing::error;

use quest_build_core::{QuestBuildError, Settings};

use crate::Cli;

/// Run the command selected by `cli`, writing user output to `out`.
///
/// `Ok(false)` means Unity ran and the build failed.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    let settings = Settings::load(cli.config.as_deref())
        .await
        .map_err(|e: QuestBuildError| anyhow!(e.user_message()))?;

    if cli.create_script {
        cli.create_script_command(&settings).execute(out)?;
        return Ok(true);
    }

    cli.build_command(&settings).execute(out).await
}

/// Process exit status for a finished run; errors are printed to `out`
pub fn exit_status<W: Write>(result: &Result<bool>, out: &mut W) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            error!("{:#}", e);
            let _ = writeln!(out, "✗ Error: {:#}", e);
            1
        }
    }
}
