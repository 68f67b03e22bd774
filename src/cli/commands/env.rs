//! Env command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::cli::args::EnvCommands;
use crate::cli::context::Context;

/// Execute an env subcommand
pub fn execute(ctx: &Context, command: &EnvCommands) -> Result<ExitCode> {
    match command {
        EnvCommands::List { file } => {
            let (_, config) = ctx.load_config(file)?;
            if config.env_vars().is_empty() {
                println!("{}", "No environment variables found.".dimmed());
                return Ok(ExitCode::SUCCESS);
            }
            for var in config.env_vars() {
                println!("{}={}", var.name.yellow(), var.value);
            }
        }
        EnvCommands::Get { file, name } => {
            let (_, config) = ctx.load_config(file)?;
            match config.get_env_var(name) {
                Some(var) => println!("{}", var.value),
                None => {
                    ctx.print_error(&format!("Variable \"{}\" not found.", name));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        EnvCommands::Set {
            file,
            name,
            value,
            format,
        } => {
            let (path, config) = ctx.load_config(file)?;
            let config = config.set_env_var(name, value);
            ctx.save_config(&config, &path, format.as_deref())?;
        }
        EnvCommands::Remove { file, name, format } => {
            let (path, config) = ctx.load_config(file)?;
            if config.get_env_var(name).is_none() {
                ctx.print_warning(&format!("Variable \"{}\" not found, nothing removed.", name));
            }
            let config = config.remove_env_var(name);
            ctx.save_config(&config, &path, format.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
