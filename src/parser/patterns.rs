//! # Line Patterns
//!
//! Keyword prefixes and regex patterns used to classify a trimmed line.
//!
//! Classification is deliberately prefix based; the only construct that
//! needs a regex is the `name() {` function header.

use lazy_static::lazy_static;
use regex::Regex;

/// Prefixes of a source directive: `source file` or `. file`
pub const SOURCE_PREFIXES: [&str; 2] = ["source ", ". "];

pub const ALIAS_PREFIX: &str = "alias ";

pub const EXPORT_PREFIX: &str = "export ";

pub const FUNCTION_KEYWORD: &str = "function ";

/// Line starts that mark an assignment as possibly conditional
pub const CONDITIONAL_PREFIXES: [&str; 4] = ["if ", "case ", "while ", "for "];

lazy_static! {
    /// Matches a POSIX function header: `name() {`
    ///
    /// Captures:
    /// - Group 1: function name
    pub static ref FUNC_HEADER_RE: Regex = Regex::new(
        r"^([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*\)\s*\{"
    ).unwrap();
}

/// Whether a trimmed line looks like the start of a function definition.
///
/// True when the line contains `function `, contains `() {`, ends with
/// `()`, or matches [`FUNC_HEADER_RE`].
pub fn looks_like_function(line: &str) -> bool {
    line.contains(FUNCTION_KEYWORD)
        || line.contains("() {")
        || line.ends_with("()")
        || FUNC_HEADER_RE.is_match(line)
}

/// Whether a name may start a variable, export, or alias.
pub fn is_valid_name_start(name: &str) -> bool {
    name.chars()
        .next()
        .map(|c| c.is_alphabetic() || c == '_')
        .unwrap_or(false)
}
