//! User settings loaded from `<config_dir>/shelledit/config.toml`
//!
//! ```toml
//! [format]
//! default = "bash"
//!
//! [lint]
//! disabled = ["empty-value"]
//! fail_on = "warning"
//!
//! [log]
//! level = "debug"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::formatter::DEFAULT_FORMAT;
use crate::linter::Severity;

/// Main settings structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub lint: LintSettings,
    #[serde(default)]
    pub log: LogSettings,
}

/// Output format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormatSettings {
    #[serde(default = "default_format")]
    pub default: String,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            default: default_format(),
        }
    }
}

/// Lint options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LintSettings {
    /// Rule names to skip
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Lowest severity that makes `lint` exit non-zero
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
}

fn default_fail_on() -> Severity {
    Severity::Error
}

impl Default for LintSettings {
    fn default() -> Self {
        LintSettings {
            disabled: Vec::new(),
            fail_on: default_fail_on(),
        }
    }
}

/// Logging options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Get the shelledit configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("shelledit")
    }

    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load settings from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
