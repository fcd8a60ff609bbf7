//! String utility functions

/// Split file text into addressable lines.
///
/// Splits on `\n` only. Unlike `str::lines()`, the text after the last `\n`
/// is always kept as its own (possibly empty) line, so joining the result
/// with `\n` gives back the original text byte for byte. Line numbers used
/// by the parser and the editor are indices into this vector plus one.
///
/// # Examples
///
/// ```
/// use shellcfg::utils::strings::split_lines;
///
/// assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a", ""]);
/// assert_eq!(split_lines(""), vec![""]);
/// assert_eq!(split_lines("a\nb\n").join("\n"), "a\nb\n");
/// ```
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// Truncate a string to fit within `max_width` characters, adding "..." if truncated
pub fn truncate(s: &str, max_width: usize) -> String {
    // Keep tables on one row per statement
    let s = s.replace('\n', "\\n");

    if s.chars().count() <= max_width {
        s
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}
