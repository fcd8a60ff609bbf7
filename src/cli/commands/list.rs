//! List command implementation with table output

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::cli::args::{kinds, KindArg};
use crate::search;
use crate::utils::strings::truncate;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Calculate dynamic column widths based on terminal width
fn calculate_column_widths(term_width: usize) -> (usize, usize, usize, usize) {
    // Fixed overhead: "│ " prefix (2) + " │" suffix (2) + spaces between columns (3)
    let fixed_overhead = 7;
    let kind_width = 8;
    let line_width = 9;

    let available = term_width.saturating_sub(fixed_overhead + kind_width + line_width);

    // Name gets ~30%, value gets the rest
    let name_width = (available * 30 / 100).clamp(10, 25);
    let value_width = available.saturating_sub(name_width + 1).max(10);

    (kind_width, name_width, line_width, value_width)
}

/// Execute the list command
pub fn execute(ctx: &CommandContext, kind_args: &[KindArg], json: bool) -> Result<()> {
    let statements = ctx.parse_config_file()?;
    let statements = search::filter(&statements, "", &kinds(kind_args));

    if json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
        return Ok(());
    }

    if statements.is_empty() {
        println!("{}", "No statements found.".dimmed());
        return Ok(());
    }

    let term_width = get_terminal_width();
    let (kind_w, name_w, line_w, value_w) = calculate_column_widths(term_width);

    let title = format!("┌─ {} ({}) ", ctx.config_file.display(), statements.len());
    let title = truncate(&title, term_width);
    let rule_len = term_width.saturating_sub(title.chars().count());
    println!("{}{}", title.bold(), "─".repeat(rule_len).dimmed());

    let content_width = kind_w + 1 + name_w + 1 + line_w + 1 + value_w;
    println!(
        "│ {:<kind_w$} {:<name_w$} {:<line_w$} {:<value_w$} │",
        "KIND".bold().cyan(),
        "NAME".bold().cyan(),
        "LINE".bold().cyan(),
        "VALUE".bold().cyan(),
    );
    println!("│ {} │", "─".repeat(content_width).dimmed());

    for statement in &statements {
        let kind = ctx.color_kind(statement.kind).bold();
        let name = truncate(&statement.name, name_w);
        let mut value = statement.value.clone();
        if let Some(comment) = &statement.comment {
            value.push_str(&format!("  # {}", comment));
        }
        let value = truncate(&value, value_w);

        println!(
            "│ {:<kind_w$} {:<name_w$} {:<line_w$} {:<value_w$} │",
            kind,
            name.white(),
            statement.line_span().dimmed(),
            value.dimmed(),
        );
    }

    println!("└{}┘", "─".repeat(content_width + 2).dimmed());
    println!(
        "{}",
        format!("Total: {} statement(s)", statements.len()).dimmed()
    );

    Ok(())
}
