//! # Assignment Regex Patterns
//!
//! Patterns run against the trimmed line. Quote stripping happens after the
//! match, see [`crate::utils::strings::strip_quotes`].
//!
//! ## Regex Notes
//!
//! Rust's `regex` crate has no backreferences, so `${PATH}` is matched with
//! optional braces on each side (`\$\{?PATH\}?`), the same leniency shells
//! show when reading these files by eye.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // =========================================================================
    // PATH Patterns
    // =========================================================================

    /// Matches a PATH assignment: `[export] PATH=value`
    ///
    /// Captures:
    /// - Group 1: raw value (non-empty, quotes still attached)
    pub static ref PATH_ASSIGN_RE: Regex = Regex::new(
        r#"^(?:export\s+)?PATH\s*=\s*(.+)$"#
    ).unwrap();

    /// Matches a prepend value: `/some/dir:$PATH` or `/some/dir:${PATH}`
    ///
    /// Captures:
    /// - Group 1: directory
    pub static ref PATH_PREPEND_RE: Regex = Regex::new(
        r#"^(.+?):\$\{?PATH\}?$"#
    ).unwrap();

    /// Matches an append value: `$PATH:/some/dir` or `${PATH}:/some/dir`
    ///
    /// Captures:
    /// - Group 1: directory
    pub static ref PATH_APPEND_RE: Regex = Regex::new(
        r#"^\$\{?PATH\}?:(.+)$"#
    ).unwrap();

    // =========================================================================
    // Environment Variable Patterns
    // =========================================================================

    /// Matches a generic assignment: `[export] NAME=value`
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw value (may be empty)
    pub static ref ENV_ASSIGN_RE: Regex = Regex::new(
        r#"^(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$"#
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_assign_re() {
        let caps = PATH_ASSIGN_RE
            .captures(r#"export PATH="/usr/local/bin:$PATH""#)
            .unwrap();
        assert_eq!(&caps[1], r#""/usr/local/bin:$PATH""#);

        let caps = PATH_ASSIGN_RE.captures("PATH = $PATH:/opt").unwrap();
        assert_eq!(&caps[1], "$PATH:/opt");

        assert!(PATH_ASSIGN_RE.captures("export PATH=").is_none());
        assert!(PATH_ASSIGN_RE.captures("export MANPATH=/x").is_none());
    }

    #[test]
    fn test_path_prepend_re() {
        let caps = PATH_PREPEND_RE.captures("/usr/local/bin:$PATH").unwrap();
        assert_eq!(&caps[1], "/usr/local/bin");

        let caps = PATH_PREPEND_RE.captures("$HOME/bin:${PATH}").unwrap();
        assert_eq!(&caps[1], "$HOME/bin");

        assert!(PATH_PREPEND_RE.captures("/opt/bin").is_none());
    }

    #[test]
    fn test_path_prepend_keeps_inner_colons() {
        let caps = PATH_PREPEND_RE.captures("/a:/b:$PATH").unwrap();
        assert_eq!(&caps[1], "/a:/b");
    }

    #[test]
    fn test_path_append_re() {
        let caps = PATH_APPEND_RE.captures("$PATH:/opt/bin").unwrap();
        assert_eq!(&caps[1], "/opt/bin");

        let caps = PATH_APPEND_RE.captures("${PATH}:/opt/bin").unwrap();
        assert_eq!(&caps[1], "/opt/bin");
    }

    #[test]
    fn test_env_assign_re() {
        let caps = ENV_ASSIGN_RE.captures("export EDITOR=nvim").unwrap();
        assert_eq!(&caps[1], "EDITOR");
        assert_eq!(&caps[2], "nvim");

        let caps = ENV_ASSIGN_RE.captures("_MY_VAR2 = 'x'").unwrap();
        assert_eq!(&caps[1], "_MY_VAR2");
        assert_eq!(&caps[2], "'x'");

        let caps = ENV_ASSIGN_RE.captures("EMPTY=").unwrap();
        assert_eq!(&caps[2], "");

        assert!(ENV_ASSIGN_RE.captures("2BAD=x").is_none());
        assert!(ENV_ASSIGN_RE.captures("alias ll='ls -la'").is_none());
    }
}
