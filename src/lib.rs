//! shelledit - Shell Configuration Editor
//!
//! Parses zsh/bash startup files into a structured model, applies edits,
//! writes them back out and lints them.
//!
//! # Features
//!
//! - Parse `export NAME=value` assignments and `PATH` prepends/appends,
//!   keeping every other line verbatim
//! - Pure edit operations on env vars and PATH entries
//! - Pluggable output formats (`zsh`, `bash`)
//! - Pluggable lint rules for duplicate, contradictory and empty definitions
//!
//! # Example
//!
//! ```
//! use shelledit::{parse, Formatter, FormatterRegistry, Linter, PathPosition};
//!
//! let config = parse("export EDITOR=vim\nexport EDITOR=nano\n", ".zshrc");
//! assert_eq!(config.get_env_var("EDITOR").unwrap().value, "nano");
//!
//! let config = config.add_path_entry("/opt/bin", PathPosition::Append);
//! let text = FormatterRegistry::new().get(Some("bash")).unwrap().format(&config);
//! assert!(text.contains("export PATH=\"${PATH}:/opt/bin\""));
//!
//! assert_eq!(Linter::new().lint(&config).len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod linter;
pub mod model;
pub mod parser;
pub mod utils;

pub use error::FormatError;
pub use formatter::{get_formatter, Formatter, FormatterRegistry};
pub use linter::{Diagnostic, LintRule, Linter, Severity};
pub use model::{EnvVar, PathEntry, PathPosition, RawLine, ShellConfig, ShellType};
pub use parser::{get_parser, parse, Parser};
