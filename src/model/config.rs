//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { color: true }
    }
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupConfig {
    /// Back up the target file before every edit made from the CLI
    #[serde(default = "default_true")]
    pub auto: bool,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            auto: true,
            max_count: default_max_count(),
        }
    }
}

/// Editor configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditorConfig {
    /// First line written into newly created configuration files
    #[serde(default = "default_header_comment")]
    pub header_comment: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            header_comment: default_header_comment(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_count() -> usize {
    20
}

pub(crate) fn default_header_comment() -> String {
    "# Configuration file created by shellcfg".to_string()
}

impl Config {
    /// Get the shellcfg configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("shellcfg")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
