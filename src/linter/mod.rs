//! Linter module for spotting contradictions and redundancies in a config
//!
//! ## Built-in rules
//!
//! | Rule | Severity | Finds |
//! |------|----------|-------|
//! | `duplicate-env` | warning | a variable assigned more than once |
//! | `contradictory-env` | error | a variable assigned different values |
//! | `duplicate-path` | warning | a directory added to PATH more than once |
//! | `empty-value` | info | a variable assigned the empty string |
//!
//! Rules are independent. Each sees the same config and the linter
//! concatenates their diagnostics in registration order.

mod contradictory_env;
mod duplicate_env;
mod duplicate_path;
mod empty_value;

pub use contradictory_env::ContradictoryEnvRule;
pub use duplicate_env::DuplicateEnvRule;
pub use duplicate_path::DuplicatePathRule;
pub use empty_value::EmptyValueRule;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ShellConfig;

/// Diagnostic severity, ordered `Info < Warning < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A single lint finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule: String,
    pub message: String,
    pub severity: Severity,
    pub line: Option<usize>,
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            severity,
            line: None,
            source: None,
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, message)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, message)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Info, message)
    }

    /// Attach a line; `None` (a synthesized entry) leaves it unset
    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Trait for lint rules. Implement this to add new checks.
pub trait LintRule: Send + Sync {
    /// Unique rule name, e.g. `duplicate-env`
    fn name(&self) -> &str;

    fn check(&self, config: &ShellConfig) -> Vec<Diagnostic>;
}

/// Runs an ordered list of rules against a config
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    /// Linter with the four built-in rules
    pub fn new() -> Self {
        let mut linter = Self::empty();
        linter.add_rule(Box::new(DuplicateEnvRule));
        linter.add_rule(Box::new(ContradictoryEnvRule));
        linter.add_rule(Box::new(DuplicatePathRule));
        linter.add_rule(Box::new(EmptyValueRule));
        linter
    }

    /// Linter with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it runs after the ones already registered
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Remove every rule named `name`. Returns whether anything was removed.
    pub fn disable(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.name() != name);
        self.rules.len() != before
    }

    pub fn lint(&self, config: &ShellConfig) -> Vec<Diagnostic> {
        let diagnostics: Vec<Diagnostic> = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(config))
            .collect();
        debug!(
            rules = self.rules.len(),
            diagnostics = diagnostics.len(),
            "lint finished"
        );
        diagnostics
    }

    pub fn list_rules(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-severity counts for a lint run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl LintSummary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self::default();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        summary
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0 && self.infos == 0
    }
}

/// Group items by key, keeping keys in order of first appearance
fn group_by_first_seen<'a, T, K>(items: &'a [T], key: impl Fn(&'a T) -> K) -> Vec<(K, Vec<&'a T>)>
where
    K: std::hash::Hash + Eq + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

/// Render a line for messages; synthesized entries show as `new`
fn line_label(line: Option<usize>) -> String {
    line.map_or_else(|| "new".to_string(), |l| l.to_string())
}

fn join_lines(lines: impl Iterator<Item = Option<usize>>) -> String {
    lines.map(line_label).collect::<Vec<_>>().join(", ")
}
