//! Update command implementation

use anyhow::{bail, Result};
use colored::Colorize;

use super::CommandContext;
use crate::editor::render;
use crate::model::{Statement, StatementKind};

/// Field changes requested on the command line
#[derive(Debug, Default)]
pub struct Changes {
    pub name: Option<String>,
    pub value: Option<String>,
    pub comment: Option<String>,
    pub export: Option<bool>,
}

/// Execute the update command
pub fn execute(ctx: &CommandContext, line: usize, changes: Changes) -> Result<()> {
    let statements = ctx.parse_config_file()?;

    let Some(current) = ctx.find_statement(&statements, line) else {
        bail!(
            "No statement at line {} of {}",
            line,
            ctx.config_file.display()
        );
    };

    let updated = apply_changes(current, changes)?;
    if render(&updated) == render(current) {
        println!("No changes made.");
        return Ok(());
    }

    println!("{} {}", "-".red(), render(current).red());
    println!("{} {}", "+".green(), render(&updated).green());

    ctx.backup_before_edit()?;
    ctx.editor().update_range(
        current.line_number,
        current.end_line_number,
        &ctx.config_file,
        &updated,
    )?;

    ctx.print_success(&format!(
        "Updated {} '{}' (line {})",
        updated.kind,
        updated.name,
        current.line_span()
    ));
    ctx.print_reload_hint();

    Ok(())
}

/// Build the replacement statement. The parsed statement is left untouched.
fn apply_changes(current: &Statement, changes: Changes) -> Result<Statement> {
    // The assignment inside an if/case/loop line is only a guess at its shape
    if current.is_conditional {
        bail!(
            "Line {} is part of a conditional and cannot be rewritten safely; edit it by hand",
            current.line_number
        );
    }

    let name = changes.name.unwrap_or_else(|| current.name.clone());
    let comment = match changes.comment {
        Some(comment) => Some(comment),
        None => current.comment.clone(),
    };

    let statement = match current.kind {
        StatementKind::Variable => Statement::variable(
            name,
            changes.value.unwrap_or_else(|| current.value.clone()),
        )
        .with_export(changes.export.unwrap_or(current.is_export)),
        StatementKind::Alias => Statement::alias(
            name,
            changes.value.unwrap_or_else(|| current.value.clone()),
        ),
        // A source is addressed by its path; --value and --name both set it
        StatementKind::Source => Statement::source(changes.value.unwrap_or(name)),
        // Assigning a value to a bare export turns it into an exported variable
        StatementKind::Export => match changes.value {
            Some(value) => Statement::variable(name, value).with_export(true),
            None => Statement::export(name),
        },
        StatementKind::Function => {
            let body = changes.value.or_else(|| current.body.clone());
            Statement::function(name).with_body(body)
        }
        StatementKind::Other => bail!("Line {} cannot be updated", current.line_number),
    };

    Ok(statement
        .with_comment(comment)
        .with_line_number(current.line_number)
        .with_raw_line(current.raw_line.clone()))
}
