//! Config command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::cli::args::ConfigCommands;
use crate::cli::context::Context;
use crate::config::Settings;

/// Execute a config subcommand
pub fn execute(ctx: &Context, command: &ConfigCommands) -> Result<ExitCode> {
    let path = &ctx.settings_path;

    match command {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                ctx.print_error(&format!(
                    "Settings file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
                return Ok(ExitCode::FAILURE);
            }
            Settings::default().save(path)?;
            ctx.print_success(&format!(
                "Settings written to {}",
                path.display().to_string().cyan()
            ));
        }
    }

    Ok(ExitCode::SUCCESS)
}
