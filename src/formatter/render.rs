//! Rendering shared by the POSIX formatters
//!
//! Output layout:
//!
//! ```text
//! export NAME=value          <- env vars, stored order
//!
//! export PATH="dir:$PATH"    <- PATH entries, stored order
//!
//! # raw lines verbatim       <- everything else, stored order
//! ```
//!
//! Empty sections are skipped along with their separator. Output always ends
//! with exactly one newline.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{EnvVar, PathEntry, PathPosition, ShellConfig};

lazy_static! {
    /// Characters that force double quotes around a value
    static ref NEEDS_QUOTING_RE: Regex = Regex::new(r#"[\s$`"\\!#&|;()<>]"#).unwrap();
}

/// How a formatter spells the reference to the existing PATH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRef {
    /// `$PATH`
    Bare,
    /// `${PATH}`
    Braced,
}

impl PathRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathRef::Bare => "$PATH",
            PathRef::Braced => "${PATH}",
        }
    }
}

/// Whether a value must be double-quoted, judged from its content alone
pub fn needs_quoting(value: &str) -> bool {
    value.is_empty() || NEEDS_QUOTING_RE.is_match(value)
}

pub fn format_env_var(var: &EnvVar) -> String {
    if needs_quoting(&var.value) {
        format!("export {}=\"{}\"", var.name, var.value)
    } else {
        format!("export {}={}", var.name, var.value)
    }
}

pub fn format_path_entry(entry: &PathEntry, path_ref: PathRef) -> String {
    match entry.position {
        PathPosition::Prepend => format!("export PATH=\"{}:{}\"", entry.path, path_ref.as_str()),
        PathPosition::Append => format!("export PATH=\"{}:{}\"", path_ref.as_str(), entry.path),
    }
}

/// Render a whole config
pub fn render(config: &ShellConfig, path_ref: PathRef) -> String {
    let sections = [
        config.env_vars.iter().map(format_env_var).collect::<Vec<_>>(),
        config
            .path_entries
            .iter()
            .map(|e| format_path_entry(e, path_ref))
            .collect(),
        config.raw_lines.iter().map(|r| r.content.clone()).collect(),
    ];

    let mut lines: Vec<String> = Vec::new();
    for section in sections.into_iter().filter(|s| !s.is_empty()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(section);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
