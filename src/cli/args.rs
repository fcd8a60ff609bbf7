//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{ShellDialect, StatementKind};

#[derive(Parser)]
#[command(name = "shellcfg")]
#[command(about = "Shell configuration file editor - inspect and patch Bash/Zsh/Fish startup files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to operate on (defaults to the shell's main rc file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell dialect
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Skip the automatic backup before editing
    #[arg(long, global = true)]
    pub no_backup: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show discovered configuration files for every shell
    Shells,

    /// List statements
    #[command(visible_alias = "ls")]
    List {
        /// Statement kinds to show: var|export|alias|func|source (v/x/a/f/s)
        kinds: Vec<KindArg>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search statements by name, value or comment
    Search {
        query: String,
        /// Restrict to a statement kind (repeatable)
        #[arg(short, long = "kind")]
        kinds: Vec<KindArg>,
        /// Search every discovered configuration file
        #[arg(long)]
        all: bool,
    },

    /// Show statement details
    #[command(visible_alias = "i")]
    Info {
        /// Line number of the statement
        line: usize,
    },

    /// Add a statement
    Add {
        #[command(subcommand)]
        add_command: AddCommands,
    },

    /// Update the statement at a line
    Update {
        /// Line number of the statement
        line: usize,
        #[arg(long)]
        name: Option<String>,
        /// New value (new body for functions)
        #[arg(long)]
        value: Option<String>,
        /// New inline comment ("" removes it)
        #[arg(long)]
        comment: Option<String>,
        /// Mark the variable as exported
        #[arg(long, conflicts_with = "no_export")]
        export: bool,
        /// Remove the export keyword
        #[arg(long)]
        no_export: bool,
    },

    /// Remove statements
    #[command(visible_alias = "rm")]
    Remove {
        /// Line numbers of the statements
        #[arg(required = true)]
        lines: Vec<usize>,
    },

    /// Create or delete configuration files
    File {
        #[command(subcommand)]
        file_command: FileCommands,
    },

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },

    /// Show shellcfg settings
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

/// Where a new statement goes and its inline comment
#[derive(Args, Clone, Default)]
pub struct Placement {
    /// Inline comment
    #[arg(long)]
    pub comment: Option<String>,
    /// Insert after this line instead of appending (0 = top of file)
    #[arg(long)]
    pub after: Option<usize>,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Add a variable
    #[command(visible_alias = "v")]
    Var {
        /// NAME=VALUE
        definition: String,
        #[arg(long)]
        export: bool,
        #[command(flatten)]
        placement: Placement,
    },
    /// Add an alias
    #[command(visible_alias = "a")]
    Alias {
        /// NAME=VALUE
        definition: String,
        #[command(flatten)]
        placement: Placement,
    },
    /// Add a source directive
    #[command(visible_alias = "s")]
    Source {
        path: String,
        #[command(flatten)]
        placement: Placement,
    },
    /// Add a bare export
    #[command(visible_alias = "x")]
    Export {
        name: String,
        #[command(flatten)]
        placement: Placement,
    },
    /// Add a function
    #[command(visible_alias = "f")]
    Func {
        name: String,
        /// Function body
        #[arg(long)]
        body: Option<String>,
        /// Insert after this line instead of appending (0 = top of file)
        #[arg(long)]
        after: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum FileCommands {
    /// Create a configuration file with a header comment
    Create { path: PathBuf },
    /// Delete a configuration file
    Delete { path: PathBuf },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Back up the configuration file now
    Create,
    /// List backups
    List,
    /// Restore backup
    Restore {
        /// Backup timestamp
        id: String,
    },
    /// Clean old backups
    Clean {
        /// Number to keep (defaults to backup.max_count)
        #[arg(long)]
        keep: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Bash,
    Zsh,
    Fish,
}

impl From<ShellArg> for ShellDialect {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => ShellDialect::Bash,
            ShellArg::Zsh => ShellDialect::Zsh,
            ShellArg::Fish => ShellDialect::Fish,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    #[value(aliases = ["v", "variable"])]
    Var,
    #[value(alias = "x")]
    Export,
    #[value(alias = "a")]
    Alias,
    #[value(aliases = ["f", "function"])]
    Func,
    #[value(alias = "s")]
    Source,
}

impl From<KindArg> for StatementKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Var => StatementKind::Variable,
            KindArg::Export => StatementKind::Export,
            KindArg::Alias => StatementKind::Alias,
            KindArg::Func => StatementKind::Function,
            KindArg::Source => StatementKind::Source,
        }
    }
}

pub fn kinds(args: &[KindArg]) -> Vec<StatementKind> {
    args.iter().map(|&k| k.into()).collect()
}
