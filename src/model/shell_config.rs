//! The parsed shell configuration and its pure edit operations
//!
//! Every edit borrows `self` and returns a new [`ShellConfig`]; the receiver is
//! never modified. Duplicate env vars and PATH entries are kept as-is, spotting
//! them is the linter's job.

use serde::{Deserialize, Serialize};

use super::entry::{EnvVar, PathEntry, PathPosition, RawLine, MANUAL_SOURCE};

/// Structured view of a shell startup file
///
/// The three sequences partition the parsed lines. Each keeps its own order;
/// ordering across categories is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub env_vars: Vec<EnvVar>,
    pub path_entries: Vec<PathEntry>,
    pub raw_lines: Vec<RawLine>,
}

/// Entry counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSummary {
    pub env_vars: usize,
    pub path_entries: usize,
    pub raw_lines: usize,
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.env_vars.is_empty() && self.path_entries.is_empty() && self.raw_lines.is_empty()
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            env_vars: self.env_vars.len(),
            path_entries: self.path_entries.len(),
            raw_lines: self.raw_lines.len(),
        }
    }

    // =========================================================================
    // Environment variables
    // =========================================================================

    /// All env var assignments in order, duplicates included
    pub fn env_vars(&self) -> &[EnvVar] {
        &self.env_vars
    }

    /// Last assignment of `name`, matching what the shell sees after evaluation
    pub fn get_env_var(&self, name: &str) -> Option<&EnvVar> {
        self.env_vars.iter().rev().find(|v| v.name == name)
    }

    /// Set `name` using the default `<cli>` source for new entries.
    pub fn set_env_var(&self, name: &str, value: &str) -> Self {
        self.set_env_var_with_source(name, value, MANUAL_SOURCE)
    }

    /// Replace the value of the last `name` assignment, or append a new one.
    ///
    /// An updated entry keeps its line and source. Earlier duplicates are left
    /// alone. `source` only applies when a new entry is appended.
    pub fn set_env_var_with_source(&self, name: &str, value: &str, source: &str) -> Self {
        let mut next = self.clone();
        match next.env_vars.iter_mut().rev().find(|v| v.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => next
                .env_vars
                .push(EnvVar::new(name, value).with_source(source)),
        }
        next
    }

    /// Drop every assignment of `name`
    pub fn remove_env_var(&self, name: &str) -> Self {
        Self {
            env_vars: self
                .env_vars
                .iter()
                .filter(|v| v.name != name)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    // =========================================================================
    // PATH entries
    // =========================================================================

    pub fn path_entries(&self) -> &[PathEntry] {
        &self.path_entries
    }

    /// Append a PATH entry with the default `<cli>` source.
    pub fn add_path_entry(&self, path: &str, position: PathPosition) -> Self {
        self.add_path_entry_with_source(path, position, MANUAL_SOURCE)
    }

    /// Append a PATH entry. Existing entries for the same directory are kept.
    pub fn add_path_entry_with_source(
        &self,
        path: &str,
        position: PathPosition,
        source: &str,
    ) -> Self {
        let mut next = self.clone();
        next.path_entries
            .push(PathEntry::new(path, position).with_source(source));
        next
    }

    /// Drop every entry whose directory equals `path`
    pub fn remove_path_entry(&self, path: &str) -> Self {
        Self {
            path_entries: self
                .path_entries
                .iter()
                .filter(|e| e.path != path)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Set `position` on every entry for `path`
    pub fn update_path_entry(&self, path: &str, position: PathPosition) -> Self {
        let mut next = self.clone();
        for entry in next.path_entries.iter_mut().filter(|e| e.path == path) {
            entry.position = position;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_vars(vars: &[(&str, &str, usize)]) -> ShellConfig {
        ShellConfig {
            env_vars: vars
                .iter()
                .map(|(n, v, l)| EnvVar::new(*n, *v).with_line(*l).with_source("test"))
                .collect(),
            ..ShellConfig::default()
        }
    }

    fn config_with_paths(paths: &[(&str, PathPosition, usize)]) -> ShellConfig {
        ShellConfig {
            path_entries: paths
                .iter()
                .map(|(p, pos, l)| PathEntry::new(*p, *pos).with_line(*l).with_source("test"))
                .collect(),
            ..ShellConfig::default()
        }
    }

    #[test]
    fn test_env_vars_lists_all() {
        let config = config_with_vars(&[("A", "1", 1), ("B", "2", 2), ("A", "3", 3)]);
        assert_eq!(config.env_vars().len(), 3);
    }

    #[test]
    fn test_get_env_var_missing() {
        assert!(ShellConfig::new().get_env_var("MISSING").is_none());
    }

    #[test]
    fn test_get_env_var_returns_last() {
        let config = config_with_vars(&[("EDITOR", "vim", 1), ("EDITOR", "nano", 5)]);
        let var = config.get_env_var("EDITOR").unwrap();
        assert_eq!(var.value, "nano");
        assert_eq!(var.line, Some(5));
    }

    #[test]
    fn test_set_env_var_appends_new() {
        let updated = ShellConfig::new().set_env_var("NEW_VAR", "hello");
        assert_eq!(updated.env_vars.len(), 1);
        assert_eq!(updated.env_vars[0].name, "NEW_VAR");
        assert_eq!(updated.env_vars[0].value, "hello");
        assert_eq!(updated.env_vars[0].line, None);
        assert_eq!(updated.env_vars[0].source, MANUAL_SOURCE);
    }

    #[test]
    fn test_set_env_var_with_source() {
        let updated = ShellConfig::new().set_env_var_with_source("A", "1", "import");
        assert_eq!(updated.env_vars[0].source, "import");
    }

    #[test]
    fn test_set_env_var_updates_last_only() {
        let config = config_with_vars(&[("A", "old", 1), ("B", "x", 2), ("A", "older", 3)]);
        let updated = config.set_env_var("A", "new");

        assert_eq!(updated.env_vars.len(), 3);
        assert_eq!(updated.env_vars[0].value, "old");
        assert_eq!(updated.env_vars[2].value, "new");
        assert_eq!(updated.env_vars[2].line, Some(3));
        assert_eq!(updated.env_vars[2].source, "test");
    }

    #[test]
    fn test_set_env_var_does_not_mutate() {
        let config = config_with_vars(&[("A", "1", 1)]);
        let _ = config.set_env_var("B", "2");
        let _ = config.set_env_var("A", "changed");
        assert_eq!(config.env_vars.len(), 1);
        assert_eq!(config.env_vars[0].value, "1");
    }

    #[test]
    fn test_remove_env_var_all_occurrences() {
        let config = config_with_vars(&[("A", "1", 1), ("B", "2", 2), ("A", "2", 5)]);
        let updated = config.remove_env_var("A");
        assert_eq!(updated.env_vars.len(), 1);
        assert_eq!(updated.env_vars[0].name, "B");
        assert_eq!(config.env_vars.len(), 3);
    }

    #[test]
    fn test_remove_env_var_missing_is_noop() {
        let config = config_with_vars(&[("A", "1", 1)]);
        assert_eq!(config.remove_env_var("NOPE"), config);
    }

    #[test]
    fn test_add_path_entry() {
        let updated = ShellConfig::new()
            .add_path_entry("/new/path", PathPosition::Prepend)
            .add_path_entry("/new/path", PathPosition::Append);

        assert_eq!(updated.path_entries.len(), 2);
        assert_eq!(updated.path_entries[0].position, PathPosition::Prepend);
        assert_eq!(updated.path_entries[1].position, PathPosition::Append);
        assert_eq!(updated.path_entries[1].line, None);
    }

    #[test]
    fn test_add_path_entry_does_not_mutate() {
        let config = ShellConfig::new();
        let _ = config.add_path_entry("/new/path", PathPosition::Prepend);
        assert!(config.path_entries.is_empty());
    }

    #[test]
    fn test_remove_path_entry() {
        let config = config_with_paths(&[
            ("/usr/local/bin", PathPosition::Prepend, 1),
            ("/opt/bin", PathPosition::Append, 2),
            ("/usr/local/bin", PathPosition::Append, 3),
        ]);
        let updated = config.remove_path_entry("/usr/local/bin");
        assert_eq!(updated.path_entries.len(), 1);
        assert_eq!(updated.path_entries[0].path, "/opt/bin");
    }

    #[test]
    fn test_remove_path_entry_missing_is_noop() {
        let config = config_with_paths(&[("/opt/bin", PathPosition::Append, 1)]);
        assert_eq!(config.remove_path_entry("/nowhere"), config);
    }

    #[test]
    fn test_update_path_entry_all_matches() {
        let config = config_with_paths(&[
            ("/usr/local/bin", PathPosition::Prepend, 1),
            ("/opt/bin", PathPosition::Prepend, 2),
            ("/usr/local/bin", PathPosition::Prepend, 3),
        ]);
        let updated = config.update_path_entry("/usr/local/bin", PathPosition::Append);

        assert_eq!(updated.path_entries[0].position, PathPosition::Append);
        assert_eq!(updated.path_entries[1].position, PathPosition::Prepend);
        assert_eq!(updated.path_entries[2].position, PathPosition::Append);
        assert_eq!(config.path_entries[0].position, PathPosition::Prepend);
    }

    #[test]
    fn test_update_path_entry_missing_is_noop() {
        let config = config_with_paths(&[("/opt/bin", PathPosition::Append, 1)]);
        assert_eq!(
            config.update_path_entry("/nowhere", PathPosition::Prepend),
            config
        );
    }

    #[test]
    fn test_summary() {
        let config = config_with_vars(&[("A", "1", 1)]).add_path_entry("/bin", PathPosition::Append);
        let summary = config.summary();
        assert_eq!(summary.env_vars, 1);
        assert_eq!(summary.path_entries, 1);
        assert_eq!(summary.raw_lines, 0);
    }
}
