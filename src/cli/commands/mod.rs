//! CLI command implementations
//!
//! Every command returns the process exit code; I/O and formatter errors
//! propagate as `Err`.

pub mod config;
pub mod env;
pub mod export;
pub mod formats;
pub mod lint;
pub mod load;
pub mod path;

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::args::Commands;
use crate::cli::context::Context;

/// Dispatch a parsed command
pub fn run(ctx: &Context, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Load { file } => load::execute(ctx, file),
        Commands::Env { env_command } => env::execute(ctx, env_command),
        Commands::Path { path_command } => path::execute(ctx, path_command),
        Commands::Lint { file } => lint::execute(ctx, file),
        Commands::Export { file, format } => export::execute(ctx, file, format.as_deref()),
        Commands::Formats => formats::execute(ctx),
        Commands::Config { config_command } => config::execute(ctx, config_command),
    }
}
