//! Load command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::context::Context;

/// Execute the load command
pub fn execute(ctx: &Context, file: &Path) -> Result<ExitCode> {
    let (path, config) = ctx.load_config(file)?;
    let summary = config.summary();

    println!("Loaded: {}", path.display().to_string().cyan());
    println!("  Environment variables: {}", summary.env_vars);
    println!("  PATH entries: {}", summary.path_entries);
    println!("  Other lines: {}", summary.raw_lines);

    Ok(ExitCode::SUCCESS)
}
