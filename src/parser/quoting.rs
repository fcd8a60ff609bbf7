//! # Quote-aware helpers
//!
//! Small scanners shared by the line classifiers:
//!
//! - [`split_value`] - inline comment extraction followed by unquoting
//! - [`extract_comment`] - split `value # comment` respecting quotes
//! - [`unquote`] - strip one surrounding pair of quotes
//! - [`count_braces_outside_quotes`] - brace balance for function bodies
//!
//! None of these attempt real shell tokenization. Quote state is tracked
//! within one line only.

/// Extract the trailing comment of a right-hand side, then unquote what remains.
///
/// Returns `(value, comment)`. An empty comment is reported as `None`.
pub fn split_value(raw: &str) -> (String, Option<String>) {
    let (value, comment) = extract_comment(raw.trim());
    (unquote(&value), comment)
}

/// Split off an inline `#` comment that sits outside any quoted span.
///
/// A `#` inside single or double quotes is kept as part of the value and the
/// scan moves on to the next candidate. With an unterminated quote no later
/// `#` qualifies and the text is returned untouched.
///
/// ```
/// use shellcfg::parser::quoting::extract_comment;
///
/// let (value, comment) = extract_comment(r#""a#b" # real comment"#);
/// assert_eq!(value, r#""a#b""#);
/// assert_eq!(comment.as_deref(), Some("real comment"));
/// ```
pub fn extract_comment(line: &str) -> (String, Option<String>) {
    let mut in_single_quote = false;
    let mut in_double_quote = false;

    for (i, c) in line.char_indices() {
        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '#' if !in_single_quote && !in_double_quote => {
                let value = line[..i].trim().to_string();
                let comment = line[i + 1..].trim();
                let comment = (!comment.is_empty()).then(|| comment.to_string());
                return (value, comment);
            }
            _ => {}
        }
    }

    (line.to_string(), None)
}

/// Remove one matching pair of surrounding quotes.
///
/// Double-quoted values have `\"`, `\$`, `\n` and `\t` unescaped, in that
/// order. Single-quoted values are taken literally. Anything only partially
/// quoted is returned as-is.
pub fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        value[1..value.len() - 1]
            .replace("\\\"", "\"")
            .replace("\\$", "$")
            .replace("\\n", "\n")
            .replace("\\t", "\t")
    } else if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

/// Escape a value for a double-quoted rendering; inverse of [`unquote`].
///
/// Backslashes are written as-is since `unquote` has no `\\` escape. A value
/// holding a literal `\n`, `\t`, `\$` or `\"` therefore reads back decoded.
pub fn escape_double_quoted(value: &str) -> String {
    value
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

/// Count braces `{` and `}` outside of quoted strings.
///
/// Returns `(open_count, close_count)`.
pub fn count_braces_outside_quotes(line: &str) -> (usize, usize) {
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut open_count = 0;
    let mut close_count = 0;

    for c in line.chars() {
        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '{' if !in_single_quote && !in_double_quote => open_count += 1,
            '}' if !in_single_quote && !in_double_quote => close_count += 1,
            _ => {}
        }
    }

    (open_count, close_count)
}
