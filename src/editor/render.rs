//! Statement rendering
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | Variable | `[export ]name="value"` |
//! | Alias | `alias name='value'` |
//! | Function | `name() {` / body / `}` |
//! | Source | `source value` |
//! | Export | `export name` |
//! | Other | `raw_line` verbatim |
//!
//! A non-empty comment is appended as `  # comment`.

use crate::model::{Statement, StatementKind};
use crate::parser::quoting::escape_double_quoted;

/// Body written for functions whose real body is unknown
pub const FUNCTION_BODY_PLACEHOLDER: &str = "    # Function body";

/// Render a statement back into source text.
///
/// Every kind renders to one line except `Function`, which renders to a
/// header, its body, and a closing brace.
pub fn render(statement: &Statement) -> String {
    let mut line = match statement.kind {
        StatementKind::Variable => {
            let prefix = if statement.is_export { "export " } else { "" };
            format!(
                "{}{}=\"{}\"",
                prefix,
                statement.name,
                escape_double_quoted(&statement.value)
            )
        }
        StatementKind::Alias => format!("alias {}='{}'", statement.name, statement.value),
        StatementKind::Function => render_function(statement),
        StatementKind::Source => format!("source {}", statement.value),
        StatementKind::Export => format!("export {}", statement.name),
        StatementKind::Other => statement.raw_line.clone(),
    };

    if let Some(comment) = statement.comment.as_deref().filter(|c| !c.is_empty()) {
        line.push_str("  # ");
        line.push_str(comment);
    }

    line
}

fn render_function(statement: &Statement) -> String {
    let body = match statement.body.as_deref() {
        Some(body) if !body.trim().is_empty() => {
            if body.contains('\n') || body.starts_with(char::is_whitespace) {
                body.to_string()
            } else {
                format!("    {}", body)
            }
        }
        _ => FUNCTION_BODY_PLACEHOLDER.to_string(),
    };
    format!("{}() {{\n{}\n}}", statement.name, body)
}
