//! Statement filtering

use crate::model::{Statement, StatementKind};

/// Filter statements by a case-insensitive query and a set of kinds.
///
/// A statement matches the query when its name, value or comment contains
/// it. An empty (or whitespace-only) query matches everything, and an empty
/// `kinds` slice accepts every kind. Input order is preserved.
pub fn filter(statements: &[Statement], query: &str, kinds: &[StatementKind]) -> Vec<Statement> {
    let query = query.trim().to_lowercase();

    statements
        .iter()
        .filter(|s| kinds.is_empty() || kinds.contains(&s.kind))
        .filter(|s| query.is_empty() || matches_query(s, &query))
        .cloned()
        .collect()
}

fn matches_query(statement: &Statement, query: &str) -> bool {
    statement.name.to_lowercase().contains(query)
        || statement.value.to_lowercase().contains(query)
        || statement
            .comment
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(query))
}
