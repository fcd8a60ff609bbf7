//! Shell dialect detection utilities

use crate::model::ShellDialect;
use std::path::Path;

/// Detect shell dialect from a configuration file's name or extension
pub fn detect_from_file(path: &Path) -> Option<ShellDialect> {
    if let Some(dialect) = ShellDialect::from_config_path(path) {
        return Some(dialect);
    }

    // Files without a well-known name, e.g. ~/.bash_aliases or ~/.zsh/env.zsh
    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
        if filename.contains("zsh") {
            return Some(ShellDialect::Zsh);
        }
        if filename.contains("bash") {
            return Some(ShellDialect::Bash);
        }
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => match ext.to_lowercase().as_str() {
            "sh" | "bash" => Some(ShellDialect::Bash),
            "zsh" => Some(ShellDialect::Zsh),
            "fish" => Some(ShellDialect::Fish),
            _ => None,
        },
        None => None,
    }
}

/// Get the appropriate dialect for the current context
pub fn get_shell_dialect(specified: Option<ShellDialect>, file_path: Option<&Path>) -> ShellDialect {
    // Priority: specified > file detection > environment detection > default
    if let Some(dialect) = specified {
        return dialect;
    }

    if let Some(path) = file_path {
        if let Some(dialect) = detect_from_file(path) {
            return dialect;
        }
    }

    ShellDialect::detect().unwrap_or(ShellDialect::Bash)
}
