//! Core data models for shelledit

mod entry;
mod shell;
mod shell_config;

pub use entry::{EnvVar, PathEntry, PathPosition, RawLine, MANUAL_SOURCE};
pub use shell::ShellType;
pub use shell_config::{ConfigSummary, ShellConfig};
