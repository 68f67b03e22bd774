//! Zsh configuration file formatter

use super::render::{render, PathRef};
use super::Formatter;
use crate::model::{ShellConfig, ShellType};

/// Writes `$PATH` references
pub struct ZshFormatter;

impl ZshFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ZshFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ZshFormatter {
    fn name(&self) -> &str {
        ShellType::Zsh.name()
    }

    fn format(&self, config: &ShellConfig) -> String {
        render(config, PathRef::Bare)
    }
}
