//! Entry data structures for shell configuration items

use serde::{Deserialize, Serialize};

/// Source marker for entries created through the edit API rather than parsed.
pub const MANUAL_SOURCE: &str = "<cli>";

/// Where a directory is placed relative to the existing `$PATH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPosition {
    #[default]
    Prepend,
    Append,
}

impl std::fmt::Display for PathPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathPosition::Prepend => write!(f, "prepend"),
            PathPosition::Append => write!(f, "append"),
        }
    }
}

impl std::str::FromStr for PathPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prepend" | "pre" => Ok(PathPosition::Prepend),
            "append" | "post" => Ok(PathPosition::Append),
            _ => Err(format!(
                "Unknown PATH position: {}. Must be prepend or append",
                s
            )),
        }
    }
}

/// A single environment variable assignment
///
/// # Field Semantics
/// - `name`: identifier matching `[A-Za-z_][A-Za-z0-9_]*`, never `PATH`
/// - `value`: assigned value with one layer of surrounding quotes removed
/// - `line`: 1-based source line, `None` for entries added through an edit
/// - `source`: originating file, or [`MANUAL_SOURCE`] for edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
    pub line: Option<usize>,
    pub source: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line: None,
            source: MANUAL_SOURCE.to_string(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// One directory contribution to `PATH`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    pub path: String,
    pub position: PathPosition,
    pub line: Option<usize>,
    pub source: String,
}

impl PathEntry {
    pub fn new(path: impl Into<String>, position: PathPosition) -> Self {
        Self {
            path: path.into(),
            position,
            line: None,
            source: MANUAL_SOURCE.to_string(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// A line kept verbatim: comments, blanks, aliases, functions and anything unrecognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// Original text, untrimmed
    pub content: String,
    pub line: Option<usize>,
    pub source: String,
}

impl RawLine {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            line: None,
            source: MANUAL_SOURCE.to_string(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
