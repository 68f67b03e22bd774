//! Variables assigned conflicting values

use std::collections::HashSet;

use super::{group_by_first_seen, line_label, Diagnostic, LintRule};
use crate::model::ShellConfig;

/// Errors once per variable assigned at least two distinct values.
///
/// Repeating the same value is only a duplicate, not a contradiction.
pub struct ContradictoryEnvRule;

impl LintRule for ContradictoryEnvRule {
    fn name(&self) -> &str {
        "contradictory-env"
    }

    fn check(&self, config: &ShellConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (name, occurrences) in group_by_first_seen(&config.env_vars, |v| v.name.as_str()) {
            let distinct: HashSet<&str> = occurrences.iter().map(|v| v.value.as_str()).collect();
            if occurrences.len() < 2 || distinct.len() < 2 {
                continue;
            }

            let details = occurrences
                .iter()
                .map(|v| format!("line {}: \"{}\"", line_label(v.line), v.value))
                .collect::<Vec<_>>()
                .join(", ");

            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!(
                        "Environment variable \"{}\" has contradictory values: {}",
                        name, details
                    ),
                )
                .with_line(occurrences.last().and_then(|v| v.line)),
            );
        }

        diagnostics
    }
}
