//! Remove command implementation

use anyhow::{bail, Result};
use colored::Colorize;
use std::collections::BTreeSet;

use super::CommandContext;
use crate::model::Statement;

/// Execute the remove command
pub fn execute(ctx: &CommandContext, lines: &[usize]) -> Result<()> {
    let statements = ctx.parse_config_file()?;

    let mut targets: Vec<&Statement> = Vec::new();
    for &line in lines {
        match ctx.find_statement(&statements, line) {
            Some(stmt) if !targets.contains(&stmt) => targets.push(stmt),
            Some(_) => {}
            None => ctx.print_warning(&format!("No statement at line {}, skipping", line)),
        }
    }

    if targets.is_empty() {
        bail!("Nothing to remove");
    }

    targets.sort_by_key(|s| s.line_number);
    for stmt in &targets {
        println!(
            "  {:>7}  {:<8} {} {}",
            stmt.line_span().dimmed(),
            ctx.color_kind(stmt.kind),
            stmt.name.cyan(),
            stmt.value.dimmed()
        );
    }

    let prompt = if targets.len() == 1 {
        "Remove this statement?".to_string()
    } else {
        format!("Remove these {} statements?", targets.len())
    };
    if !ctx.confirm(&prompt)? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.backup_before_edit()?;

    // Multi-line functions go over their whole span
    let doomed: BTreeSet<usize> = targets
        .iter()
        .flat_map(|s| s.line_number..=s.end_line_number)
        .collect();

    let editor = ctx.editor();
    match (doomed.len(), doomed.first().copied()) {
        (1, Some(only)) => editor.delete(only, &ctx.config_file)?,
        _ => editor.delete_many(doomed, &ctx.config_file)?,
    }

    ctx.print_success(&format!("Removed {} statement(s)", targets.len()));
    ctx.print_reload_hint();

    Ok(())
}
