//! Statement data structures for shell configuration items

use serde::{Deserialize, Serialize};

/// Statement kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Variable,
    Export, // `export NAME` without an assignment
    Alias,
    Function,
    Source,
    Other,
}

impl StatementKind {
    /// All kinds, in display order
    pub const ALL: [StatementKind; 6] = [
        StatementKind::Variable,
        StatementKind::Export,
        StatementKind::Alias,
        StatementKind::Function,
        StatementKind::Source,
        StatementKind::Other,
    ];
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::Variable => write!(f, "var"),
            StatementKind::Export => write!(f, "export"),
            StatementKind::Alias => write!(f, "alias"),
            StatementKind::Function => write!(f, "func"),
            StatementKind::Source => write!(f, "source"),
            StatementKind::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "var" | "variable" | "env" | "v" => Ok(StatementKind::Variable),
            "export" | "x" => Ok(StatementKind::Export),
            "alias" | "a" => Ok(StatementKind::Alias),
            "func" | "function" | "f" => Ok(StatementKind::Function),
            "source" | "s" => Ok(StatementKind::Source),
            "other" | "o" => Ok(StatementKind::Other),
            _ => Err(format!("Unknown statement kind: {}", s)),
        }
    }
}

/// One recognized configuration statement
///
/// # Field Semantics
/// - `name`: variable/alias/function name, the sourced path for `Source`,
///   or the bare name for `Export`
/// - `value`: assignment right-hand side, alias target, or a synthetic
///   description of the line span for `Function`
/// - `line_number` / `end_line_number`: 1-based; only functions span more
///   than one line
/// - `raw_line`: the untouched source line (header line for functions)
/// - `body`: literal function body, when known
///
/// Statements are never mutated after parsing. Edits build a new statement
/// and hand it to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub name: String,
    pub value: String,
    pub line_number: usize,
    pub end_line_number: usize,
    pub comment: Option<String>,
    pub is_export: bool,
    pub is_conditional: bool,
    pub raw_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Statement {
    pub fn new(kind: StatementKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: value.into(),
            line_number: 1,
            end_line_number: 1,
            comment: None,
            is_export: false,
            is_conditional: false,
            raw_line: String::new(),
            body: None,
        }
    }

    /// Variable assignment, `NAME=value`
    pub fn variable(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(StatementKind::Variable, name, value)
    }

    /// Alias definition, `alias name='value'`
    pub fn alias(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(StatementKind::Alias, name, value)
    }

    /// Source directive; name and value both hold the path
    pub fn source(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(StatementKind::Source, path.clone(), path)
    }

    /// Bare export of an existing variable
    pub fn export(name: impl Into<String>) -> Self {
        Self::new(StatementKind::Export, name, String::new()).with_export(true)
    }

    /// Function definition with no known body
    pub fn function(name: impl Into<String>) -> Self {
        Self::new(StatementKind::Function, name, String::new())
    }

    /// Position the statement at a single line.
    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self.end_line_number = self.end_line_number.max(line_number);
        self
    }

    pub fn with_end_line(mut self, end_line_number: usize) -> Self {
        self.end_line_number = end_line_number.max(self.line_number);
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_export(mut self, is_export: bool) -> Self {
        self.is_export = is_export;
        self
    }

    pub fn with_conditional(mut self, is_conditional: bool) -> Self {
        self.is_conditional = is_conditional;
        self
    }

    pub fn with_raw_line(mut self, raw_line: impl Into<String>) -> Self {
        self.raw_line = raw_line.into();
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Number of source lines covered by this statement.
    pub fn line_count(&self) -> usize {
        self.end_line_number.saturating_sub(self.line_number) + 1
    }

    /// `"5"` or `"5-9"`
    pub fn line_span(&self) -> String {
        if self.end_line_number > self.line_number {
            format!("{}-{}", self.line_number, self.end_line_number)
        } else {
            format!("{}", self.line_number)
        }
    }

    // Display heuristics below. None of them are parse guarantees.

    /// Whether the value looks like a filesystem path.
    pub fn is_path_value(&self) -> bool {
        self.value.contains('/')
            && (self.value.starts_with('/')
                || self.value.starts_with('~')
                || self.value.contains(':'))
    }

    /// Whether the name looks like a colon-separated search path (`PATH`, `MANPATH`, ...).
    pub fn is_path_variable(&self) -> bool {
        self.name.to_uppercase().ends_with("PATH")
    }

    /// Split a PATH-like value into its entries.
    pub fn path_components(&self) -> Option<Vec<String>> {
        if !self.is_path_variable() {
            return None;
        }
        Some(
            self.value
                .split(':')
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Whether the value references other variables (`$VAR` / `${VAR}`).
    pub fn contains_variable_refs(&self) -> bool {
        self.value.contains('$')
    }
}
