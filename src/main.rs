//! quest-build entry point
//!
//! Exit status is 0 when the package was built or only the script was
//! requested, 1 on a failed build or any error before it.

use std::process::ExitCode;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use quest_build::common::{APP_NAME, VERSION};
use quest_build::{app, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    debug!("{} v{} starting with {:?}", APP_NAME, VERSION, cli);

    let mut stdout = std::io::stdout();
    let result = app::run(&cli, &mut stdout).await;
    ExitCode::from(app::exit_status(&result, &mut stdout))
}

/// Initialize logging; `RUST_LOG` overrides the default `info` level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
