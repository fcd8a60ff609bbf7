//! shellcfg - Shell Configuration File Editor

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shellcfg::cli::args::{AddCommands, Commands};
use shellcfg::cli::commands::{self, update::Changes};
use shellcfg::cli::{Cli, CommandContext};

fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SHELLCFG_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli)?;

    match &cli.command {
        Commands::Shells => commands::shells::execute(&ctx),
        Commands::List { kinds, json } => commands::list::execute(&ctx, kinds, *json),
        Commands::Search { query, kinds, all } => {
            commands::search::execute(&ctx, query, kinds, *all)
        }
        Commands::Info { line } => commands::info::execute(&ctx, *line),
        Commands::Add { add_command } => {
            if let AddCommands::Func { body: None, .. } = add_command {
                ctx.print_warning("No --body given, writing a placeholder body");
            }
            commands::add::execute(&ctx, add_command)
        }
        Commands::Update {
            line,
            name,
            value,
            comment,
            export,
            no_export,
        } => {
            let export = match (*export, *no_export) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let changes = Changes {
                name: name.clone(),
                value: value.clone(),
                comment: comment.clone(),
                export,
            };
            commands::update::execute(&ctx, *line, changes)
        }
        Commands::Remove { lines } => commands::remove::execute(&ctx, lines),
        Commands::File { file_command } => commands::file::execute(&ctx, file_command),
        Commands::Backup { backup_command } => commands::backup::execute(&ctx, backup_command),
        Commands::Config { init } => commands::config::execute(&ctx, *init),
    }
}
