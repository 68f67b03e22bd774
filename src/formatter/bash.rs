//! Bash configuration file formatter

use super::render::{render, PathRef};
use super::Formatter;
use crate::model::{ShellConfig, ShellType};

/// Bash configuration file formatter
///
/// Identical to the zsh output except PATH is referenced as `${PATH}`.
pub struct BashFormatter;

impl BashFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BashFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for BashFormatter {
    fn name(&self) -> &str {
        ShellType::Bash.name()
    }

    fn format(&self, config: &ShellConfig) -> String {
        render(config, PathRef::Braced)
    }
}
