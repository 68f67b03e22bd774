//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::formatter::FormatterRegistry;
use crate::linter::Linter;
use crate::model::ShellConfig;
use crate::parser::parse;
use crate::utils::path::{read_file, resolve_path, write_file};
use crate::utils::shell_detect::resolve_format;

/// Common context for command execution
pub struct Context {
    pub settings: Settings,
    /// Where `settings` was loaded from, or would be
    pub settings_path: PathBuf,
    pub registry: FormatterRegistry,
    pub linter: Linter,
}

impl Context {
    /// Build the registry and linter from settings
    pub fn new(settings: Settings, settings_path: PathBuf) -> Result<Self> {
        let mut registry = FormatterRegistry::new();
        registry.set_default_format(&settings.format.default)?;

        let mut linter = Linter::new();
        for rule in &settings.lint.disabled {
            if !linter.disable(rule) {
                warn!(rule = %rule, "ignoring unknown lint rule in settings");
            }
        }

        Ok(Self {
            settings,
            settings_path,
            registry,
            linter,
        })
    }

    /// Read and parse a shell config file.
    ///
    /// Entries are tagged with the resolved absolute path.
    pub fn load_config(&self, file: &Path) -> Result<(PathBuf, ShellConfig)> {
        let path = resolve_path(file);
        let content = read_file(&path)?;
        let config = parse(&content, &path.to_string_lossy());
        Ok((path, config))
    }

    /// Format `config` and write it to `path`.
    ///
    /// Format priority: `format` > detection from the file name > registry default.
    pub fn save_config(&self, config: &ShellConfig, path: &Path, format: Option<&str>) -> Result<()> {
        let name = resolve_format(format, Some(path));
        let formatter = self.registry.get(name.as_deref())?;
        write_file(path, &formatter.format(config))?;
        debug!(path = %path.display(), format = formatter.name(), "saved shell config");

        self.print_success(&format!(
            "Config saved to {} (format: {})",
            path.display().to_string().cyan(),
            formatter.name()
        ));
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
