//! # Parser Module
//!
//! Turns shell configuration text into an ordered list of [`Statement`]s.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: StatementParser + main loop
//! ├── patterns.rs     - Keyword prefixes and the function header regex
//! ├── parsers.rs      - try_parse_* methods, one per statement kind
//! ├── function.rs     - FunctionBuilder (brace counting, body capture)
//! └── quoting.rs      - Comment extraction, unquoting, brace counting
//! ```
//!
//! ## Classification Order
//!
//! Blank and `#` lines are skipped. Every other line is matched against
//! the following, first match wins:
//!
//! | Step | Detection | Kind |
//! |------|-----------|------|
//! | 1 | `source ` / `. ` | Source |
//! | 2 | `alias ` (requires `=`) | Alias |
//! | 3 | function heuristic | Function (may span lines) |
//! | 4 | `export ` | Export or exported Variable |
//! | 5 | contains `=` | Variable |
//!
//! Lines matching none of these produce nothing. Parsing never fails on
//! content; only reading the file can fail, and that is reported as a
//! message next to an empty statement list.
//!
//! ## Usage
//!
//! ```rust
//! use shellcfg::parser::StatementParser;
//!
//! let parser = StatementParser::new();
//! let result = parser.parse("A=1\nalias ll='ls -la'\n");
//!
//! assert_eq!(result.statements.len(), 2);
//! assert_eq!(result.statements[1].name, "ll");
//! ```

pub mod function;
pub mod parsers;
pub mod patterns;
pub mod quoting;

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace};

use crate::model::Statement;
use crate::utils::strings::split_lines;

use function::{FunctionBuilder, DEFAULT_LOOKAHEAD};
use parsers::{
    detect_function_start, strip_source_keyword, try_parse_alias, try_parse_assignment,
    try_parse_export, try_parse_source,
};
use patterns::{ALIAS_PREFIX, EXPORT_PREFIX};

/// File-level failure messages reported by [`StatementParser::parse_file`]
pub const FILE_NOT_FOUND: &str = "File not found";
pub const PERMISSION_DENIED: &str = "Permission denied";
pub const UNREADABLE: &str = "Unable to read file";

/// Statements recovered from one piece of text
#[derive(Debug, Default)]
pub struct ParseResult {
    pub statements: Vec<Statement>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
}

/// Result of parsing a file on disk.
///
/// `error` is set when the file could not be read; `statements` is then empty.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub statements: Vec<Statement>,
    pub error: Option<String>,
}

impl ParseOutcome {
    fn failed(message: &str) -> Self {
        Self {
            statements: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

/// Shell configuration statement parser.
///
/// The same grammar subset is used for every dialect.
#[derive(Debug, Clone)]
pub struct StatementParser {
    function_lookahead: usize,
}

impl StatementParser {
    pub fn new() -> Self {
        Self {
            function_lookahead: DEFAULT_LOOKAHEAD,
        }
    }

    /// Override how many lines past a function header are scanned for its closing brace.
    pub fn with_function_lookahead(mut self, lines: usize) -> Self {
        self.function_lookahead = lines;
        self
    }

    /// Parse configuration text.
    pub fn parse(&self, content: &str) -> ParseResult {
        let mut result = ParseResult::new();
        let lines = split_lines(content);

        let mut index = 0;
        while index < lines.len() {
            let raw_line = lines[index];
            let line_number = index + 1;
            let trimmed = raw_line.trim();
            index += 1;

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if strip_source_keyword(trimmed).is_some() {
                if let Some(stmt) = try_parse_source(trimmed, line_number, raw_line) {
                    result.add_statement(stmt);
                }
                continue;
            }

            if trimmed.starts_with(ALIAS_PREFIX) {
                match try_parse_alias(trimmed, line_number, raw_line) {
                    Some(stmt) => result.add_statement(stmt),
                    None => trace!(line = line_number, "alias without a valid assignment"),
                }
                continue;
            }

            if let Some(name) = detect_function_start(trimmed) {
                let func =
                    FunctionBuilder::resolve(name, &lines, line_number - 1, self.function_lookahead);
                // Skip the body so its lines are not classified again
                index = func.end_index + 1;
                result.add_statement(func.build(raw_line));
                continue;
            }

            let stmt = if trimmed.starts_with(EXPORT_PREFIX) {
                try_parse_export(trimmed, line_number, raw_line)
            } else if trimmed.contains('=') {
                try_parse_assignment(trimmed, false, line_number, raw_line)
            } else {
                None
            };

            if let Some(stmt) = stmt {
                result.add_statement(stmt);
            }
        }

        result
    }

    /// Read and parse a file.
    ///
    /// Never returns an error: read failures are described by
    /// [`ParseOutcome::error`] and yield no statements.
    pub fn parse_file(&self, path: &Path) -> ParseOutcome {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "cannot read config file");
                return match err.kind() {
                    ErrorKind::NotFound => ParseOutcome::failed(FILE_NOT_FOUND),
                    ErrorKind::PermissionDenied => ParseOutcome::failed(PERMISSION_DENIED),
                    _ => ParseOutcome::failed(UNREADABLE),
                };
            }
        };

        let Ok(content) = String::from_utf8(bytes) else {
            debug!(path = %path.display(), "config file is not valid UTF-8");
            return ParseOutcome::failed(UNREADABLE);
        };

        let result = self.parse(&content);
        debug!(
            path = %path.display(),
            statements = result.statements.len(),
            "parsed config file"
        );
        ParseOutcome {
            statements: result.statements,
            error: None,
        }
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
