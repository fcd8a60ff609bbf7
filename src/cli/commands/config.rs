//! Config command implementation - show or initialize shellcfg settings

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::config::save_config;
use crate::model::Config;

/// Execute the config command
pub fn execute(ctx: &CommandContext, init: bool) -> Result<()> {
    let path = Config::config_path();

    if init {
        if path.exists() && !ctx.confirm("Settings file exists. Reset it to defaults?")? {
            println!("Cancelled.");
            return Ok(());
        }
        save_config(&Config::default())?;
        ctx.print_success(&format!("Wrote {}", path.display()));
        return Ok(());
    }

    let state = if path.exists() { "" } else { " (not created, using defaults)" };
    println!("{}{}", path.display().to_string().bold(), state.dimmed());
    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);

    Ok(())
}
