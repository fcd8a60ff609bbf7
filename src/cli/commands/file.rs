//! File command implementation - create or delete configuration files

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::CommandContext;
use crate::cli::args::FileCommands;
use crate::utils::path::expand_tilde;
use crate::utils::shell_detect::detect_from_file;

/// Execute the file command
pub fn execute(ctx: &CommandContext, file_cmd: &FileCommands) -> Result<()> {
    match file_cmd {
        FileCommands::Create { path } => create(ctx, path),
        FileCommands::Delete { path } => delete(ctx, path),
    }
}

fn create(ctx: &CommandContext, path: &Path) -> Result<()> {
    let path = expand_tilde(path);
    let editor = ctx.editor();

    if editor.file_exists(&path) {
        ctx.print_warning(&format!("{} already exists", path.display()));
        if !ctx.confirm("Overwrite it with an empty configuration file?")? {
            println!("Cancelled.");
            return Ok(());
        }
        if !ctx.no_backup && ctx.config.backup.auto {
            let backup = editor.backup(&path)?;
            println!("{} {}", "Backup:".dimmed(), backup.display().to_string().dimmed());
        }
    }

    let dialect = detect_from_file(&path).unwrap_or(ctx.dialect);
    editor.create_file(&path, dialect)?;

    ctx.print_success(&format!(
        "Created {} configuration file {}",
        dialect,
        path.display().to_string().cyan()
    ));
    Ok(())
}

fn delete(ctx: &CommandContext, path: &Path) -> Result<()> {
    let path = expand_tilde(path);
    let editor = ctx.editor();

    if !ctx.confirm(&format!("Delete {}?", path.display()))? {
        println!("Cancelled.");
        return Ok(());
    }

    if !ctx.no_backup && ctx.config.backup.auto && editor.file_exists(&path) {
        let backup = editor.backup(&path)?;
        println!("{} {}", "Backup:".dimmed(), backup.display().to_string().dimmed());
    }

    editor.delete_file(&path)?;
    ctx.print_success(&format!("Deleted {}", path.display()));
    Ok(())
}
