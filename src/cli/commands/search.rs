//! Search command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::cli::args::{kinds, KindArg};
use crate::model::Statement;
use crate::repository::ConfigRepository;
use crate::search;

/// Execute the search command
pub fn execute(ctx: &CommandContext, query: &str, kind_args: &[KindArg], all: bool) -> Result<()> {
    let kinds = kinds(kind_args);

    if !all {
        let statements = ctx.parse_config_file()?;
        let hits = search::filter(&statements, query, &kinds);
        print_hits(ctx, &hits);
        return report_total(hits.len());
    }

    let mut repo = ConfigRepository::new()?;
    repo.reload();

    let mut total = 0;
    for file in repo.existing_files() {
        let hits = repo.search(query, &kinds, Some(file.path.as_path()));
        if hits.is_empty() {
            continue;
        }
        println!("{}", file.display_path().bold());
        print_hits(ctx, &hits);
        println!();
        total += hits.len();
    }

    report_total(total)
}

fn print_hits(ctx: &CommandContext, hits: &[Statement]) {
    for statement in hits {
        println!(
            "  {:>7}  {:<8} {} {}",
            statement.line_span().dimmed(),
            ctx.color_kind(statement.kind),
            statement.name.white().bold(),
            statement.value.dimmed()
        );
    }
}

fn report_total(count: usize) -> Result<()> {
    if count == 0 {
        println!("{}", "No matches.".dimmed());
    } else {
        println!("{}", format!("{} match(es)", count).dimmed());
    }
    Ok(())
}
