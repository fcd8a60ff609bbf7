//! Info command implementation - Display detailed information about a statement

use anyhow::{bail, Result};
use colored::Colorize;

use super::CommandContext;

/// Execute the info command
pub fn execute(ctx: &CommandContext, line: usize) -> Result<()> {
    let statements = ctx.parse_config_file()?;

    let Some(statement) = ctx.find_statement(&statements, line) else {
        bail!(
            "No statement at line {} of {}",
            line,
            ctx.config_file.display()
        );
    };

    let kind = ctx.color_kind(statement.kind);
    let title = format!("{}: {}", kind, statement.name.white().bold());
    let box_width = std::cmp::max(50, statement.raw_line.chars().count() + 16);

    println!(
        "╭─ {} {}",
        title,
        "─".repeat(box_width.saturating_sub(statement.name.chars().count() + 12))
    );

    let row = |label: &str, value: &str| {
        println!("│ {:<12} {}", label.cyan(), value.dimmed());
    };

    row(
        if statement.line_count() > 1 { "Lines" } else { "Line" },
        &statement.line_span(),
    );
    row("Value", &statement.value);
    row("Export", &statement.is_export.to_string());
    if statement.is_conditional {
        row("Conditional", "true");
    }
    if let Some(comment) = &statement.comment {
        row("Comment", comment);
    }
    row("Raw", &statement.raw_line);

    if let Some(body) = &statement.body {
        println!("│ {:<12}", "Body".cyan());
        for body_line in body.lines() {
            println!("│ {:<12} {}", "", body_line.dimmed());
        }
    }

    if let Some(components) = statement.path_components() {
        println!("│ {:<12}", "Path entries".cyan());
        for component in components {
            println!("│ {:<12} {}", "", component.dimmed());
        }
    } else if statement.is_path_value() {
        row("Path value", "true");
    }
    if statement.contains_variable_refs() {
        row("References", "uses $variables");
    }

    println!("╰{}", "─".repeat(box_width + 1));

    Ok(())
}
