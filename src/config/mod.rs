//! Configuration management module

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::model::Config;

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_path = Config::config_path();
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(config_path)
}

/// Load the configuration, falling back to defaults when no file exists
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();
    Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))
}

/// Save configuration
pub fn save_config(config: &Config) -> Result<()> {
    ensure_config_dir()?;
    config.save()
}
