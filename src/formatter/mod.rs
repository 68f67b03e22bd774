//! Formatter module for shell configuration files

mod bash;
mod registry;
pub mod render;
mod zsh;

pub use bash::BashFormatter;
pub use registry::{FormatterRegistry, DEFAULT_FORMAT};
pub use zsh::ZshFormatter;

use crate::model::{ShellConfig, ShellType};

/// Trait for shell configuration formatters.
///
/// Implement this and hand it to [`FormatterRegistry::register`] to add a new
/// output dialect.
pub trait Formatter: Send + Sync {
    /// Unique format name, e.g. `zsh` or `bash`
    fn name(&self) -> &str;

    /// Render a whole config as shell text ending in a single newline
    fn format(&self, config: &ShellConfig) -> String;
}

/// Get the built-in formatter for the specified shell type
pub fn get_formatter(shell_type: ShellType) -> Box<dyn Formatter> {
    match shell_type {
        ShellType::Zsh => Box::new(ZshFormatter::new()),
        ShellType::Bash => Box::new(BashFormatter::new()),
    }
}
