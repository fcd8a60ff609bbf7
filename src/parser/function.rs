//! # FunctionBuilder
//!
//! Resolves the line extent of a shell function and builds its statement.
//!
//! ## Example Input
//!
//! ```bash
//! my_func() {
//!     echo "hello"
//!     echo "world"
//! }
//! ```
//!
//! The header line opens one brace, so lines are scanned until the balance
//! returns to zero. The statement covers lines 1-3 and carries the two
//! `echo` lines as its body.
//!
//! ## Line Range
//!
//! The scan is bounded by a lookahead window. A body that never closes
//! inside the window is reported as a header-only function so that the
//! lines after it are still classified on their own.

use super::quoting::count_braces_outside_quotes;
use crate::model::{Statement, StatementKind};

/// Lines scanned past the header before giving up on a closing brace
pub const DEFAULT_LOOKAHEAD: usize = 100;

/// Builder for function definitions.
///
/// # Fields
///
/// - `name`: Function name extracted from the header
/// - `start_index`: 0-based index of the header line
/// - `end_index`: 0-based index of the closing line (equal to `start_index`
///   for one-line or unterminated functions)
/// - `body`: Body text, when it could be recovered
#[derive(Debug)]
pub struct FunctionBuilder {
    pub name: String,
    pub start_index: usize,
    pub end_index: usize,
    pub body: Option<String>,
}

impl FunctionBuilder {
    /// Resolve the extent of the function whose header is `lines[start_index]`.
    pub fn resolve(name: String, lines: &[&str], start_index: usize, lookahead: usize) -> Self {
        let header = lines[start_index];
        let (open, close) = count_braces_outside_quotes(header);
        let mut balance = open as isize - close as isize;

        // `name()` with the opening brace alone on the following line
        let brace_on_next_line = open == 0
            && lines
                .get(start_index + 1)
                .map(|next| next.trim_start().starts_with('{'))
                .unwrap_or(false);

        if balance <= 0 && !brace_on_next_line {
            return Self {
                name,
                start_index,
                end_index: start_index,
                body: one_line_body(header),
            };
        }

        let mut opened = balance > 0;
        let last = lines.len().saturating_sub(1).min(start_index.saturating_add(lookahead));

        for index in start_index + 1..=last {
            let line = lines[index];
            if line.trim_start().starts_with('#') {
                continue;
            }
            let (open, close) = count_braces_outside_quotes(line);
            balance += open as isize - close as isize;
            opened |= open > 0;

            if opened && balance <= 0 {
                let body_start = if brace_on_next_line {
                    start_index + 2
                } else {
                    start_index + 1
                };
                return Self {
                    name,
                    start_index,
                    end_index: index,
                    body: Some(multi_line_body(lines, body_start, index)),
                };
            }
        }

        Self {
            name,
            start_index,
            end_index: start_index,
            body: None,
        }
    }

    /// Build the final statement with 1-based line numbers.
    pub fn build(self, raw_line: &str) -> Statement {
        let line_number = self.start_index + 1;
        let end_line_number = self.end_index + 1;
        let value = if end_line_number > line_number {
            format!("function (lines {}-{})", line_number, end_line_number)
        } else {
            format!("function (line {})", line_number)
        };

        Statement::new(StatementKind::Function, self.name, value)
            .with_line_number(line_number)
            .with_end_line(end_line_number)
            .with_raw_line(raw_line)
            .with_body(self.body)
    }
}

/// Extract the function name from a header line.
///
/// With the `function` keyword the name runs up to the first `(`, or the
/// first `{` when there are no parentheses. Otherwise it runs up to the
/// first `(`. Returns `None` when no name can be extracted.
pub fn function_name(line: &str) -> Option<String> {
    let name = if let Some(rest) = line.strip_prefix("function ") {
        let end = rest
            .find('(')
            .or_else(|| rest.find('{'))
            .unwrap_or(rest.len());
        &rest[..end]
    } else {
        &line[..line.find('(')?]
    };

    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Text between the first `{` and the last `}` of a one-line function
fn one_line_body(line: &str) -> Option<String> {
    let start = line.find('{')?;
    let end = line.rfind('}')?;
    if end <= start + 1 {
        return None;
    }
    let body = line[start + 1..end].trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Lines from `body_start` up to the closing line, plus whatever precedes
/// the closing brace on that line (`  echo done; }`).
fn multi_line_body(lines: &[&str], body_start: usize, closing_index: usize) -> String {
    let mut body: Vec<&str> = if body_start < closing_index {
        lines[body_start..closing_index].to_vec()
    } else {
        Vec::new()
    };

    let closing = lines[closing_index];
    if let Some(idx) = closing.rfind('}') {
        let head = closing[..idx].trim_end();
        if !head.trim().is_empty() && closing_index >= body_start {
            body.push(head);
        }
    }

    body.join("\n")
}
