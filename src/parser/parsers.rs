//! # Line Classifiers
//!
//! One method per statement kind. Each receives the trimmed line, its
//! 1-based line number and the untouched source line.
//!
//! ## Method Naming Convention
//!
//! - `try_parse_*` - Returns `Option<Statement>`; `None` means the line
//!   produces no statement
//! - `detect_*` - Cheap check used to pick a classifier

use super::function::function_name;
use super::patterns::*;
use super::quoting::split_value;
use crate::model::{Statement, StatementKind};

/// Strip the `source ` / `. ` keyword, if present.
pub fn strip_source_keyword(line: &str) -> Option<&str> {
    SOURCE_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
}

/// Try to parse a line as a source directive.
///
/// Matches:
/// - `source file`
/// - `. file`
///
/// Both `name` and `value` hold the unquoted path.
pub fn try_parse_source(line: &str, line_num: usize, raw_line: &str) -> Option<Statement> {
    let rest = strip_source_keyword(line)?;
    let (path, comment) = split_value(rest);
    if path.is_empty() {
        return None;
    }

    Some(
        Statement::source(path)
            .with_comment(comment)
            .with_line_number(line_num)
            .with_raw_line(raw_line),
    )
}

/// Try to parse a line as an alias.
///
/// `alias name=value`, with the value optionally quoted. Leading option
/// flags (`alias -g name=...` in zsh) are skipped. A line without `=` is
/// not an alias definition.
pub fn try_parse_alias(line: &str, line_num: usize, raw_line: &str) -> Option<Statement> {
    let mut rest = line.strip_prefix(ALIAS_PREFIX)?.trim_start();
    while rest.starts_with('-') {
        rest = rest
            .split_once(char::is_whitespace)
            .map(|(_, tail)| tail.trim_start())
            .unwrap_or("");
    }

    let (name, value) = rest.split_once('=')?;
    let name = name.trim();
    if !is_valid_name_start(name) {
        return None;
    }
    let (value, comment) = split_value(value);

    Some(
        Statement::alias(name, value)
            .with_comment(comment)
            .with_line_number(line_num)
            .with_raw_line(raw_line),
    )
}

/// Detect if a line starts a function definition.
///
/// Returns the function name when the line matches the function heuristic
/// and a name can be extracted from it.
pub fn detect_function_start(line: &str) -> Option<String> {
    if !looks_like_function(line) {
        return None;
    }
    function_name(line)
}

/// Try to parse an `export` line.
///
/// - `export NAME` produces an `Export` statement with an empty value
/// - `export NAME=value` produces an exported `Variable`
pub fn try_parse_export(line: &str, line_num: usize, raw_line: &str) -> Option<Statement> {
    let rest = line.strip_prefix(EXPORT_PREFIX)?.trim();

    if !rest.contains('=') {
        if !is_valid_name_start(rest) {
            return None;
        }
        return Some(
            Statement::export(rest)
                .with_line_number(line_num)
                .with_raw_line(raw_line),
        );
    }

    try_parse_assignment(rest, true, line_num, raw_line)
}

/// Try to parse `NAME=value`.
///
/// Splits on the first `=` only. The name must start with a letter or an
/// underscore. `is_conditional` is set when the line opens an `if`, `case`,
/// `while` or `for` construct.
pub fn try_parse_assignment(
    line: &str,
    is_export: bool,
    line_num: usize,
    raw_line: &str,
) -> Option<Statement> {
    let (name, value) = line.split_once('=')?;
    let name = name.trim();
    if !is_valid_name_start(name) {
        return None;
    }

    let (value, comment) = split_value(value);
    let is_conditional = CONDITIONAL_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix));

    Some(
        Statement::new(StatementKind::Variable, name, value)
            .with_export(is_export)
            .with_conditional(is_conditional)
            .with_comment(comment)
            .with_line_number(line_num)
            .with_raw_line(raw_line),
    )
}
