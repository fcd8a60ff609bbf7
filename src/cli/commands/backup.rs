//! Backup command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::backup::BackupManager;
use crate::cli::args::BackupCommands;

/// Execute the backup command
pub fn execute(ctx: &CommandContext, backup_cmd: &BackupCommands) -> Result<()> {
    let backup_manager = ctx.backup_manager();

    match backup_cmd {
        BackupCommands::Create => create_backup(ctx, &backup_manager),
        BackupCommands::List => list_backups(ctx, &backup_manager),
        BackupCommands::Restore { id } => restore_backup(ctx, &backup_manager, id),
        BackupCommands::Clean { keep } => clean_backups(
            &backup_manager,
            keep.unwrap_or(ctx.config.backup.max_count),
        ),
    }
}

fn create_backup(ctx: &CommandContext, manager: &BackupManager) -> Result<()> {
    let path = manager.create_backup()?;
    ctx.print_success(&format!(
        "Created backup {}",
        path.display().to_string().cyan()
    ));
    Ok(())
}

fn list_backups(ctx: &CommandContext, manager: &BackupManager) -> Result<()> {
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        "Backups of".bold(),
        ctx.config_file.display().to_string().bold()
    );
    println!();

    println!(
        "{:<14} {:<22} {}",
        "ID".bold().cyan(),
        "CREATED (UTC)".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(50).dimmed());

    for backup in &backups {
        println!(
            "{:<14} {:<22} {}",
            backup.id().white(),
            backup.created().dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &CommandContext, manager: &BackupManager, id: &str) -> Result<()> {
    let Some(backup) = manager.get_backup(id)? else {
        anyhow::bail!("Backup not found: {}", id);
    };

    println!(
        "Restoring backup: {} ({})",
        backup.id().cyan(),
        backup.created().dimmed()
    );

    if !ctx.confirm("This will overwrite your current configuration. Continue?")? {
        println!("Cancelled.");
        return Ok(());
    }

    manager.restore_backup(id)?;

    ctx.print_success(&format!(
        "Restored backup to {}",
        ctx.config_file.display().to_string().cyan()
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn clean_backups(manager: &BackupManager, keep: usize) -> Result<()> {
    let removed = manager.cleanup_keep(keep)?;

    if removed == 0 {
        println!("{}", "No old backups to clean.".dimmed());
    } else {
        println!(
            "{} Removed {} old backup(s), keeping {}",
            "✓".green(),
            removed,
            keep
        );
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
