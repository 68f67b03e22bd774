//! # POSIX Shell Parser
//!
//! Parses `.zshrc`, `.bashrc` and other POSIX-style startup files.
//!
//! ## Line Classification
//!
//! Each physical line is classified on its own, in this order:
//!
//! | Check | Result |
//! |-------|--------|
//! | blank or starts with `#` | [`RawLine`] |
//! | `[export] PATH=<dir>:$PATH` | [`PathEntry`] (prepend) |
//! | `[export] PATH=$PATH:<dir>` | [`PathEntry`] (append) |
//! | `[export] NAME=value`, `NAME != PATH` | [`EnvVar`] |
//! | anything else | [`RawLine`] |
//!
//! A PATH assignment without a `$PATH` reference overwrites PATH entirely and
//! has no prepend/append form, so it is kept as a raw line.

use tracing::debug;

use super::patterns::{ENV_ASSIGN_RE, PATH_APPEND_RE, PATH_ASSIGN_RE, PATH_PREPEND_RE};
use super::Parser;
use crate::model::{EnvVar, PathEntry, PathPosition, RawLine, ShellConfig, ShellType};
use crate::utils::strings::{numbered_lines, strip_quotes};

/// Line-oriented parser shared by zsh and bash.
///
/// Parsing is total: anything not understood is kept verbatim as a raw line.
pub struct PosixParser {
    shell_type: ShellType,
}

impl PosixParser {
    pub fn new(shell_type: ShellType) -> Self {
        Self { shell_type }
    }
}

impl Default for PosixParser {
    fn default() -> Self {
        Self::new(ShellType::Zsh)
    }
}

impl Parser for PosixParser {
    fn parse(&self, content: &str, source: &str) -> ShellConfig {
        let mut config = ShellConfig::new();

        for (line_number, line) in numbered_lines(content) {
            let trimmed = line.trim();

            // Comments are checked first so `# export A=1` stays a comment
            if trimmed.is_empty() || trimmed.starts_with('#') {
                config
                    .raw_lines
                    .push(raw_line(line, line_number, source));
                continue;
            }

            if let Some(entry) = try_parse_path(trimmed, line_number, source) {
                config.path_entries.push(entry);
                continue;
            }

            if let Some(var) = try_parse_env(trimmed, line_number, source) {
                config.env_vars.push(var);
                continue;
            }

            config
                .raw_lines
                .push(raw_line(line, line_number, source));
        }

        let summary = config.summary();
        debug!(
            source,
            shell = %self.shell_type,
            env_vars = summary.env_vars,
            path_entries = summary.path_entries,
            raw_lines = summary.raw_lines,
            "parsed shell config"
        );

        config
    }

    fn shell_type(&self) -> ShellType {
        self.shell_type
    }
}

fn raw_line(line: &str, line_number: usize, source: &str) -> RawLine {
    RawLine::new(line)
        .with_line(line_number)
        .with_source(source)
}

/// Try to parse a trimmed line as a PATH prepend/append.
///
/// Returns `None` for non-PATH lines and for full PATH overrides.
pub fn try_parse_path(line: &str, line_number: usize, source: &str) -> Option<PathEntry> {
    let caps = PATH_ASSIGN_RE.captures(line)?;
    let value = strip_quotes(&caps[1]);

    let (path, position) = if let Some(prepend) = PATH_PREPEND_RE.captures(value) {
        (prepend[1].to_string(), PathPosition::Prepend)
    } else if let Some(append) = PATH_APPEND_RE.captures(value) {
        (append[1].to_string(), PathPosition::Append)
    } else {
        return None;
    };

    Some(
        PathEntry::new(path, position)
            .with_line(line_number)
            .with_source(source),
    )
}

/// Try to parse a trimmed line as `[export] NAME=value`.
///
/// `PATH` is never returned as an env var.
pub fn try_parse_env(line: &str, line_number: usize, source: &str) -> Option<EnvVar> {
    let caps = ENV_ASSIGN_RE.captures(line)?;
    let name = &caps[1];
    if name == "PATH" {
        return None;
    }

    Some(
        EnvVar::new(name, strip_quotes(&caps[2]))
            .with_line(line_number)
            .with_source(source),
    )
}
