//! Named formatter lookup
//!
//! New formats can be registered at runtime. Lookups fall back to the
//! configured default when no name is given. Formats are listed in
//! registration order, built-ins first.

use tracing::debug;

use super::{BashFormatter, Formatter, ZshFormatter};
use crate::error::{FormatError, Result};

/// Format used when nothing else is configured
pub const DEFAULT_FORMAT: &str = "zsh";

pub struct FormatterRegistry {
    formatters: Vec<Box<dyn Formatter>>,
    default_format: String,
}

impl FormatterRegistry {
    /// Registry with the built-in `zsh` and `bash` formatters, defaulting to `zsh`
    pub fn new() -> Self {
        let mut registry = Self {
            formatters: Vec::new(),
            default_format: DEFAULT_FORMAT.to_string(),
        };
        registry.register(Box::new(ZshFormatter::new()));
        registry.register(Box::new(BashFormatter::new()));
        registry
    }

    /// Add a formatter. One with the same name is replaced in place.
    pub fn register(&mut self, formatter: Box<dyn Formatter>) {
        debug!(format = formatter.name(), "registering formatter");
        match self
            .formatters
            .iter()
            .position(|f| f.name() == formatter.name())
        {
            Some(index) => self.formatters[index] = formatter,
            None => self.formatters.push(formatter),
        }
    }

    fn find(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters
            .iter()
            .find(|f| f.name() == name)
            .map(|f| f.as_ref())
    }

    /// Look up `name`, or the default format when `None`
    pub fn get(&self, name: Option<&str>) -> Result<&dyn Formatter> {
        let name = name.unwrap_or(self.default_format.as_str());
        self.find(name).ok_or_else(|| self.unknown(name))
    }

    /// Registered format names in registration order
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.iter().map(|f| f.name().to_string()).collect()
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    pub fn set_default_format(&mut self, name: &str) -> Result<()> {
        if self.find(name).is_none() {
            return Err(self.unknown(name));
        }
        self.default_format = name.to_string();
        Ok(())
    }

    fn unknown(&self, name: &str) -> FormatError {
        FormatError::UnknownFormat {
            name: name.to_string(),
            available: self.list_formats(),
        }
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
