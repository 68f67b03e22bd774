//! Variables assigned more than once

use super::{group_by_first_seen, join_lines, Diagnostic, LintRule};
use crate::model::ShellConfig;

/// Warns once per variable name that is assigned two or more times
pub struct DuplicateEnvRule;

impl LintRule for DuplicateEnvRule {
    fn name(&self) -> &str {
        "duplicate-env"
    }

    fn check(&self, config: &ShellConfig) -> Vec<Diagnostic> {
        group_by_first_seen(&config.env_vars, |v| v.name.as_str())
            .into_iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(name, occurrences)| {
                let last = occurrences.last().and_then(|v| v.line);
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "Environment variable \"{}\" is defined {} times (lines: {})",
                        name,
                        occurrences.len(),
                        join_lines(occurrences.iter().map(|v| v.line))
                    ),
                )
                .with_line(last)
            })
            .collect()
    }
}
