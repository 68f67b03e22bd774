//! Export command implementation

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::context::Context;
use crate::utils::shell_detect::resolve_format;

/// Write the re-rendered file to stdout
pub fn execute(ctx: &Context, file: &Path, format: Option<&str>) -> Result<ExitCode> {
    let (path, config) = ctx.load_config(file)?;
    let name = resolve_format(format, Some(&path));
    let formatter = ctx.registry.get(name.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(formatter.format(&config).as_bytes())?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
