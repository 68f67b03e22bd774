use shelledit::formatter::{BashFormatter, ZshFormatter};
use shelledit::{parse, Formatter, Linter, PathPosition, Severity, ShellConfig};

const SAMPLE: &str = r#"# ~/.zshrc
export EDITOR="nvim"
export LANG=en_US.UTF-8
export MSG='hello world'
export PATH="/usr/local/bin:$PATH"
export PATH="$PATH:$HOME/.cargo/bin"
export PATH="/opt/override"

alias ll='ls -la'
EMPTY=
setopt autocd
"#;

#[test]
fn test_parse_sample() {
    let config = parse(SAMPLE, "sample");

    let names: Vec<_> = config.env_vars().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["EDITOR", "LANG", "MSG", "EMPTY"]);
    assert_eq!(config.path_entries().len(), 2);
    assert_eq!(config.raw_lines.len(), 6);
    assert_eq!(config.raw_lines.last().unwrap().line, Some(12));
    assert!(config
        .raw_lines
        .iter()
        .any(|r| r.content == r#"export PATH="/opt/override""#));
}

#[test]
fn test_zsh_round_trip_keeps_values_and_positions() {
    let config = parse(SAMPLE, "sample");
    let output = ZshFormatter::new().format(&config);
    let reparsed = parse(&output, "sample");

    let pairs = |c: &ShellConfig| -> Vec<(String, String)> {
        c.env_vars()
            .iter()
            .map(|v| (v.name.clone(), v.value.clone()))
            .collect()
    };
    let paths = |c: &ShellConfig| -> Vec<(String, PathPosition)> {
        c.path_entries()
            .iter()
            .map(|e| (e.path.clone(), e.position))
            .collect()
    };

    assert_eq!(pairs(&reparsed), pairs(&config));
    assert_eq!(paths(&reparsed), paths(&config));
}

#[test]
fn test_raw_lines_survive_formatting() {
    let config = parse(SAMPLE, "sample");
    let output = ZshFormatter::new().format(&config);
    // The final newline of the input is kept as a blank raw line
    assert!(output.ends_with("setopt autocd\n\n"));

    // Section separators come back as extra blank raw lines
    let reparsed = parse(&output, "sample");
    let contents: Vec<_> = reparsed
        .raw_lines
        .iter()
        .map(|r| r.content.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    assert_eq!(
        contents,
        vec![
            "# ~/.zshrc",
            r#"export PATH="/opt/override""#,
            "alias ll='ls -la'",
            "setopt autocd"
        ]
    );
}

#[test]
fn test_bash_round_trip_reads_braced_path() {
    let config = parse(SAMPLE, "sample");
    let reparsed = parse(&BashFormatter::new().format(&config), "sample");
    assert_eq!(reparsed.path_entries().len(), 2);
    assert_eq!(reparsed.path_entries()[1].path, "$HOME/.cargo/bin");
    assert_eq!(reparsed.path_entries()[1].position, PathPosition::Append);
}

#[test]
fn test_newline_terminated_input() {
    let config = parse("export A=1\n", "f");
    assert_eq!(config.raw_lines.len(), 1);
    assert_eq!(config.raw_lines[0].content, "");
    assert_eq!(config.raw_lines[0].line, Some(2));

    let unterminated = parse("export A=1", "f");
    assert!(unterminated.raw_lines.is_empty());
}

#[test]
fn test_no_op_removals() {
    let config = parse(SAMPLE, "sample");
    assert_eq!(config.remove_env_var("NOT_THERE"), config);
    assert_eq!(config.remove_path_entry("/not/there"), config);
}

#[test]
fn test_last_write_wins() {
    let mut config = parse("export A=0\nexport A=1\n", "f");
    for value in ["x", "y", "z"] {
        config = config.set_env_var("A", value);
        assert_eq!(config.get_env_var("A").unwrap().value, value);
    }
    assert_eq!(config.env_vars().len(), 2);
    assert_eq!(config.env_vars()[0].value, "0");
}

#[test]
fn test_total_erasure() {
    let config = parse("export A=1\nexport B=2\nA=3\nexport A=4\n", "f");
    let erased = config.remove_env_var("A");
    assert!(erased.env_vars().iter().all(|v| v.name != "A"));
    assert_eq!(erased.env_vars().len(), 1);
}

#[test]
fn test_quoting_is_content_determined() {
    for value in ["", "a b", "$HOME", "a`b", "say \"x\"", "c:\\d", "hi!", "#", "a&b", "a|b", "a;b", "(x)", "<x>"] {
        let out = ZshFormatter::new().format(&ShellConfig::new().set_env_var("V", value));
        assert_eq!(out, format!("export V=\"{}\"\n", value), "{value:?}");
    }
    for value in ["plain", "/usr/bin", "it's", "a=b", "1.2.3"] {
        let out = ZshFormatter::new().format(&ShellConfig::new().set_env_var("V", value));
        assert_eq!(out, format!("export V={}\n", value), "{value:?}");
    }
}

#[test]
fn test_original_quoting_ignored() {
    let config = parse("export A='vim'\nexport B=\"x y\"\n", "f");
    let output = BashFormatter::new().format(&config);
    assert_eq!(output, "export A=vim\nexport B=\"x y\"\n\n\n");
}

#[test]
fn test_msg_formatting_in_both_dialects() {
    let config = ShellConfig::new().set_env_var("MSG", "hello world");
    assert!(ZshFormatter::new().format(&config).contains(r#"MSG="hello world""#));
    assert!(BashFormatter::new().format(&config).contains(r#"MSG="hello world""#));
}

#[test]
fn test_duplicate_and_contradiction_disjoint() {
    let linter = Linter::new();

    let same = linter.lint(&parse("export A=1\nexport A=1\n", "f"));
    assert_eq!(same.len(), 1);
    assert_eq!(same[0].rule, "duplicate-env");

    let differing = linter.lint(&parse("export A=1\nexport A=2\n", "f"));
    let rules: Vec<_> = differing.iter().map(|d| (d.rule.as_str(), d.severity)).collect();
    assert_eq!(
        rules,
        vec![
            ("duplicate-env", Severity::Warning),
            ("contradictory-env", Severity::Error)
        ]
    );
    assert!(differing.iter().all(|d| d.line == Some(2)));
}

#[test]
fn test_lint_after_edits() {
    let config = parse("export PATH=\"/opt/bin:$PATH\"\n", "f")
        .add_path_entry("/opt/bin", PathPosition::Append)
        .set_env_var("EMPTY", "");
    let diagnostics = Linter::new().lint(&config);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].rule, "duplicate-path");
    assert_eq!(diagnostics[0].line, None);
    assert_eq!(diagnostics[1].rule, "empty-value");
    assert_eq!(diagnostics[1].source.as_deref(), Some("<cli>"));
}
