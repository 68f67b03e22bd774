//! # Parser Module
//!
//! Turns shell startup file text into a [`ShellConfig`].
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: Parser trait + factory function
//! ├── patterns.rs     - Regex patterns (PATH_*, ENV_ASSIGN_RE)
//! └── posix.rs        - PosixParser, the line classifier for zsh and bash
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelledit::parser::{get_parser, Parser};
//! use shelledit::model::ShellType;
//!
//! let parser = get_parser(ShellType::Zsh);
//! let content = std::fs::read_to_string("/home/me/.zshrc")?;
//! let config = parser.parse(&content, "/home/me/.zshrc");
//!
//! for var in config.env_vars() {
//!     println!("{}={} (line {:?})", var.name, var.value, var.line);
//! }
//! ```
//!
//! ## How to Modify
//!
//! ### Recognizing a new assignment form
//!
//! 1. Add the regex in `patterns.rs`
//! 2. Add a `try_parse_*` function in `posix.rs`
//! 3. Call it from the classification loop before the raw-line fallback

pub mod patterns;
mod posix;

pub use posix::{try_parse_env, try_parse_path, PosixParser};

use crate::model::{ShellConfig, ShellType};

/// Trait for shell configuration parsers.
///
/// Parsing never fails: lines that are not understood are kept as raw lines.
pub trait Parser: Send + Sync {
    /// Parse `content`, tagging every entry with `source` (usually the file path).
    fn parse(&self, content: &str, source: &str) -> ShellConfig;

    /// Get the shell type this parser handles.
    fn shell_type(&self) -> ShellType;
}

/// Factory function to get the appropriate parser for a shell type.
pub fn get_parser(shell_type: ShellType) -> Box<dyn Parser> {
    match shell_type {
        ShellType::Zsh | ShellType::Bash => Box::new(PosixParser::new(shell_type)),
    }
}

/// Parse with the default parser.
pub fn parse(content: &str, source: &str) -> ShellConfig {
    PosixParser::default().parse(content, source)
}
