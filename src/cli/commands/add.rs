//! Add command implementation

use anyhow::{bail, Result};
use colored::Colorize;

use super::CommandContext;
use crate::cli::args::{AddCommands, Placement};
use crate::model::{Statement, StatementKind};
use crate::parser::patterns::is_valid_name_start;
use crate::parser::quoting::unquote;
use crate::parser::StatementParser;

/// Execute the add command
pub fn execute(ctx: &CommandContext, add_cmd: &AddCommands) -> Result<()> {
    let statements = ctx.parse_config_file()?;

    let (statement, after) = match add_cmd {
        AddCommands::Var {
            definition,
            export,
            placement,
        } => {
            let (name, value) = parse_definition(definition)?;
            let stmt = Statement::variable(name, unquote(&value)).with_export(*export);
            (with_comment(stmt, placement), placement.after)
        }
        AddCommands::Alias {
            definition,
            placement,
        } => {
            let (name, value) = parse_definition(definition)?;
            let stmt = Statement::alias(name, unquote(&value));
            (with_comment(stmt, placement), placement.after)
        }
        AddCommands::Source { path, placement } => {
            (with_comment(Statement::source(path.as_str()), placement), placement.after)
        }
        AddCommands::Export { name, placement } => {
            check_name(name)?;
            (with_comment(Statement::export(name.as_str()), placement), placement.after)
        }
        AddCommands::Func { name, body, after } => {
            check_name(name)?;
            (
                Statement::function(name.as_str()).with_body(body.clone()),
                *after,
            )
        }
    };

    // Sources are identified by path, everything else by name
    let existing = statements.iter().find(|s| {
        s.kind == statement.kind
            && if statement.kind == StatementKind::Source {
                s.value == statement.value
            } else {
                s.name == statement.name
            }
    });

    if let Some(existing) = existing {
        println!(
            "{} '{}' already exists at line {}: {}",
            existing.kind,
            existing.name.cyan(),
            existing.line_span(),
            existing.value.dimmed()
        );
        if !ctx.confirm("Add another definition?")? {
            println!("Skipped.");
            return Ok(());
        }
    }

    ctx.backup_before_edit()?;

    let editor = ctx.editor();
    match after {
        Some(line) => editor.insert(&statement, &ctx.config_file, line)?,
        None => editor.append(&statement, &ctx.config_file)?,
    }

    // Report where the statement landed in the rewritten file
    let reparsed = StatementParser::new().parse_file(&ctx.config_file).statements;
    let location = reparsed
        .iter()
        .filter(|s| s.kind == statement.kind && s.name == statement.name)
        .map(|s| s.line_span())
        .last()
        .unwrap_or_else(|| "?".to_string());

    ctx.print_success(&format!(
        "Added {} '{}' at line {}",
        statement.kind, statement.name, location
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn with_comment(statement: Statement, placement: &Placement) -> Statement {
    statement.with_comment(placement.comment.clone())
}

/// Split a `NAME=VALUE` definition at the first `=`
fn parse_definition(definition: &str) -> Result<(String, String)> {
    let Some((name, value)) = definition.split_once('=') else {
        bail!("Invalid format. Expected NAME=VALUE, got '{}'", definition);
    };
    let name = name.trim();
    check_name(name)?;
    Ok((name.to_string(), value.to_string()))
}

fn check_name(name: &str) -> Result<()> {
    if !is_valid_name_start(name) || name.chars().any(char::is_whitespace) {
        bail!(
            "Invalid name '{}': must start with a letter or underscore",
            name
        );
    }
    Ok(())
}
