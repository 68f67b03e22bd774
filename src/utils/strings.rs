//! String utility functions

/// Split file content into physical lines on `\n`.
///
/// Every `\n` separates two lines, so a file ending in a newline has an empty
/// last line and empty input is a single empty line. `\r` is left in place.
///
/// # Examples
///
/// ```
/// use shelledit::utils::strings::split_source_lines;
///
/// assert_eq!(split_source_lines("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_source_lines("a\n"), vec!["a", ""]);
/// assert_eq!(split_source_lines(""), vec![""]);
/// ```
pub fn split_source_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// Pair each physical line with its 1-based line number
pub fn numbered_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    split_source_lines(s)
        .into_iter()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
}

/// Strip one layer of matching surrounding quotes.
///
/// The value is trimmed first. Nothing inside the quotes is unescaped, so
/// `"a"b"` becomes `a"b`, and a lone quote character counts as both ends.
pub fn strip_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    let quoted = (trimmed.starts_with('"') && trimmed.ends_with('"'))
        || (trimmed.starts_with('\'') && trimmed.ends_with('\''));
    if !quoted {
        return trimmed;
    }
    // Both quote characters are one byte wide
    trimmed.get(1..trimmed.len() - 1).unwrap_or("")
}
