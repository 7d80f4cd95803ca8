//! `dukit` command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dukit::app::run_diff;
use dukit::cli::{Cli, Commands};
use dukit::infrastructure::config::Settings;
use dukit::infrastructure::telemetry::TelemetryBuilder;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load configuration")?;

    TelemetryBuilder::from_settings("dukit", &settings.telemetry).init()?;
    info!("DUKIT starting");

    match cli.command {
        Commands::Diff(args) => {
            // Unlocked handles: the worker thread logs to stderr meanwhile.
            run_diff(&args, settings.diff, &mut std::io::stdout(), &mut std::io::stderr()).await?;
        }
    }
    Ok(())
}
