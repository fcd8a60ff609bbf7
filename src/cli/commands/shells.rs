//! Shells command implementation - show every dialect's candidate files

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::backup::format_timestamp;
use crate::repository::ConfigRepository;

/// Execute the shells command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut repo = ConfigRepository::new()?;
    repo.reload();

    for shell in repo.shells() {
        let marker = if shell.dialect == ctx.dialect { " (current)" } else { "" };
        println!("{}{}", shell.name().bold(), marker.dimmed());

        for file in &shell.config_files {
            if !file.exists {
                println!("  {} {}", "✗".dimmed(), file.display_path().dimmed());
                continue;
            }

            let modified = file
                .last_modified
                .map(|t| format_timestamp(t.unix_timestamp()))
                .unwrap_or_else(|| "-".to_string());

            println!(
                "  {} {:<32} {:>4} statement(s)  {}",
                "✓".green(),
                file.display_path(),
                file.statements.len(),
                modified.dimmed()
            );
            if let Some(error) = &file.parse_error {
                ctx.print_error(&format!("{}: {}", file.file_name(), error));
            }
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "Total: {} statement(s), {} unique name(s)",
            repo.total_count(),
            repo.unique_names().len()
        )
        .dimmed()
    );

    Ok(())
}
