//! shelledit - Shell Configuration Editor

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use shelledit::cli::{commands, Cli, Context};
use shelledit::config::Settings;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load(Some(settings_path.as_path()))?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.log.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SHELLEDIT_LOG").unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let ctx = Context::new(settings, settings_path)?;
    commands::run(&ctx, &cli.command)
}
