//! Directories added to PATH more than once

use super::{group_by_first_seen, join_lines, Diagnostic, LintRule};
use crate::model::ShellConfig;

/// Warns once per directory added two or more times, whatever the position
pub struct DuplicatePathRule;

impl LintRule for DuplicatePathRule {
    fn name(&self) -> &str {
        "duplicate-path"
    }

    fn check(&self, config: &ShellConfig) -> Vec<Diagnostic> {
        group_by_first_seen(&config.path_entries, |e| e.path.as_str())
            .into_iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(path, occurrences)| {
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "PATH entry \"{}\" is added {} times (lines: {})",
                        path,
                        occurrences.len(),
                        join_lines(occurrences.iter().map(|e| e.line))
                    ),
                )
                .with_line(occurrences.last().and_then(|e| e.line))
            })
            .collect()
    }
}
