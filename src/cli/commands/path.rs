//! Path command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::cli::args::PathCommands;
use crate::cli::context::Context;
use crate::model::PathPosition;

/// Execute a path subcommand
pub fn execute(ctx: &Context, command: &PathCommands) -> Result<ExitCode> {
    match command {
        PathCommands::List { file } => {
            let (_, config) = ctx.load_config(file)?;
            if config.path_entries().is_empty() {
                println!("{}", "No PATH entries found.".dimmed());
                return Ok(ExitCode::SUCCESS);
            }
            for entry in config.path_entries() {
                let position = match entry.position {
                    PathPosition::Prepend => entry.position.to_string().green(),
                    PathPosition::Append => entry.position.to_string().blue(),
                };
                println!("[{}] {}", position, entry.path);
            }
        }
        PathCommands::Add {
            file,
            dir,
            position,
            format,
        } => {
            let (path, config) = ctx.load_config(file)?;
            let config = config.add_path_entry(dir, (*position).into());
            ctx.save_config(&config, &path, format.as_deref())?;
        }
        PathCommands::Remove { file, dir, format } => {
            let (path, config) = ctx.load_config(file)?;
            if !config.path_entries().iter().any(|e| &e.path == dir) {
                ctx.print_warning(&format!("PATH entry \"{}\" not found, nothing removed.", dir));
            }
            let config = config.remove_path_entry(dir);
            ctx.save_config(&config, &path, format.as_deref())?;
        }
        PathCommands::Move {
            file,
            dir,
            position,
            format,
        } => {
            let (path, config) = ctx.load_config(file)?;
            if !config.path_entries().iter().any(|e| &e.path == dir) {
                ctx.print_error(&format!("PATH entry \"{}\" not found.", dir));
                return Ok(ExitCode::FAILURE);
            }
            let config = config.update_path_entry(dir, (*position).into());
            ctx.save_config(&config, &path, format.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
