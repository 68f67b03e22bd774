//! Formats command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::cli::context::Context;

/// List registered formats, marking the default
pub fn execute(ctx: &Context) -> Result<ExitCode> {
    let default_format = ctx.registry.default_format();
    for name in ctx.registry.list_formats() {
        if name == default_format {
            println!("  {} {}", name.bold(), "(default)".dimmed());
        } else {
            println!("  {}", name);
        }
    }
    Ok(ExitCode::SUCCESS)
}
