//! Variables assigned the empty string

use super::{Diagnostic, LintRule};
use crate::model::ShellConfig;

/// One info per empty assignment, at that assignment's own line
pub struct EmptyValueRule;

impl LintRule for EmptyValueRule {
    fn name(&self) -> &str {
        "empty-value"
    }

    fn check(&self, config: &ShellConfig) -> Vec<Diagnostic> {
        config
            .env_vars
            .iter()
            .filter(|v| v.value.is_empty())
            .map(|v| {
                Diagnostic::info(
                    self.name(),
                    format!("Environment variable \"{}\" has an empty value", v.name),
                )
                .with_line(v.line)
                .with_source(v.source.as_str())
            })
            .collect()
    }
}
