//! Lint command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::context::Context;
use crate::linter::{LintSummary, Severity};

/// Execute the lint command
pub fn execute(ctx: &Context, file: &Path) -> Result<ExitCode> {
    let (path, config) = ctx.load_config(file)?;
    let diagnostics = ctx.linter.lint(&config);

    if diagnostics.is_empty() {
        ctx.print_success("No issues found.");
        return Ok(ExitCode::SUCCESS);
    }

    let default_source = path.display().to_string();
    for diagnostic in &diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => format!("[{}]", diagnostic.severity).red(),
            Severity::Warning => format!("[{}]", diagnostic.severity).yellow(),
            Severity::Info => format!("[{}]", diagnostic.severity).cyan(),
        };
        let source = diagnostic.source.as_deref().unwrap_or(&default_source);
        let location = diagnostic
            .line
            .map(|line| format!("{}:{}", source, line))
            .unwrap_or_else(|| source.to_string());

        println!(
            "{} {} ({}): {}",
            severity,
            location,
            diagnostic.rule.dimmed(),
            diagnostic.message
        );
    }

    let summary = LintSummary::from_diagnostics(&diagnostics);
    println!();
    println!(
        "Found {} error(s), {} warning(s), {} info(s).",
        summary.errors, summary.warnings, summary.infos
    );

    let fail_on = ctx.settings.lint.fail_on;
    if diagnostics.iter().any(|d| d.severity >= fail_on) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
