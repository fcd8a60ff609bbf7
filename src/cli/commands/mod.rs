//! CLI command implementations

pub mod add;
pub mod backup;
pub mod config;
pub mod file;
pub mod info;
pub mod list;
pub mod remove;
pub mod search;
pub mod shells;
pub mod update;

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::Confirm;
use std::path::PathBuf;
use tracing::debug;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::editor::FileEditor;
use crate::model::{Config, ShellDialect, Statement, StatementKind};
use crate::parser::StatementParser;
use crate::utils::path::expand_tilde;
use crate::utils::shell_detect::get_shell_dialect;

/// Common context for command execution
pub struct CommandContext {
    pub config: Config,
    pub dialect: ShellDialect,
    pub config_file: PathBuf,
    pub yes: bool,
    pub no_backup: bool,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;

        if !config.ui.color {
            colored::control::set_override(false);
        }

        let file = cli.file.as_ref().map(expand_tilde);
        let dialect = get_shell_dialect(cli.shell.map(|s| s.into()), file.as_deref());
        let config_file = file.unwrap_or_else(|| dialect.default_config_path());

        debug!(file = %config_file.display(), %dialect, "command context");

        Ok(Self {
            config,
            dialect,
            config_file,
            yes: cli.yes,
            no_backup: cli.no_backup,
        })
    }

    /// Read and parse the configuration file
    pub fn parse_config_file(&self) -> Result<Vec<Statement>> {
        if !self.config_file.exists() {
            bail!(
                "Configuration file not found: {}. Use 'shellcfg file create' to create it.",
                self.config_file.display()
            );
        }

        let outcome = StatementParser::new().parse_file(&self.config_file);
        if let Some(error) = outcome.error {
            bail!("{}: {}", error, self.config_file.display());
        }
        Ok(outcome.statements)
    }

    pub fn editor(&self) -> FileEditor {
        FileEditor::from_config(&self.config)
    }

    /// Get a BackupManager instance
    pub fn backup_manager(&self) -> BackupManager {
        BackupManager::new(&self.config_file, &self.config)
    }

    /// Back up the target file unless backups are disabled
    pub fn backup_before_edit(&self) -> Result<()> {
        if self.no_backup || !self.config.backup.auto {
            return Ok(());
        }
        let path = self.backup_manager().create_backup()?;
        println!("{} {}", "Backup:".dimmed(), path.display().to_string().dimmed());
        Ok(())
    }

    /// Ask for confirmation unless `--yes` was given
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    /// Find the statement covering a line (any line of a function's span)
    pub fn find_statement<'a>(&self, statements: &'a [Statement], line: usize) -> Option<&'a Statement> {
        statements
            .iter()
            .find(|s| s.line_number <= line && line <= s.end_line_number)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }

    /// Color a statement kind for display
    pub fn color_kind(&self, kind: StatementKind) -> colored::ColoredString {
        let kind_str = kind.to_string();
        match kind {
            StatementKind::Variable => kind_str.yellow(),
            StatementKind::Export => kind_str.cyan(),
            StatementKind::Alias => kind_str.green(),
            StatementKind::Function => kind_str.blue(),
            StatementKind::Source => kind_str.magenta(),
            StatementKind::Other => kind_str.white(),
        }
    }
}
