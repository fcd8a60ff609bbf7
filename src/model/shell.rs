//! Shell dialect detection and configuration paths

use std::env;
use std::path::{Path, PathBuf};

use super::ConfigFile;

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellDialect {
    Bash,
    Zsh,
    Fish,
}

impl ShellDialect {
    pub const ALL: [ShellDialect; 3] = [ShellDialect::Bash, ShellDialect::Zsh, ShellDialect::Fish];

    /// Detect dialect from the `$SHELL` environment variable
    pub fn detect() -> Option<Self> {
        let shell = env::var("SHELL").ok()?;
        Self::from_shell_path(&shell)
    }

    /// Guess dialect from a shell executable path such as `/usr/bin/zsh`
    pub fn from_shell_path(shell: &str) -> Option<Self> {
        let program = Path::new(shell).file_name()?.to_string_lossy();
        if program.contains("zsh") {
            Some(ShellDialect::Zsh)
        } else if program.contains("fish") {
            Some(ShellDialect::Fish)
        } else if program.contains("bash") || program == "sh" {
            Some(ShellDialect::Bash)
        } else {
            None
        }
    }

    /// Guess dialect from a configuration file name
    pub fn from_config_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy();
        if file_name.ends_with(".fish") {
            return Some(ShellDialect::Fish);
        }
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.config_file_names().contains(&file_name.as_ref()))
    }

    /// Candidate configuration file names, most important first
    pub fn config_file_names(&self) -> &'static [&'static str] {
        match self {
            ShellDialect::Bash => &[".bashrc", ".bash_profile", ".bash_login", ".profile"],
            ShellDialect::Zsh => &[".zshrc", ".zprofile", ".zshenv"],
            ShellDialect::Fish => &["config.fish"],
        }
    }

    /// Directory holding this dialect's configuration files, relative to `home`
    pub fn config_dir(&self, home: &Path) -> PathBuf {
        match self {
            ShellDialect::Fish => home.join(".config").join("fish"),
            ShellDialect::Bash | ShellDialect::Zsh => home.to_path_buf(),
        }
    }

    /// Full candidate paths under `home`
    pub fn candidate_paths(&self, home: &Path) -> Vec<PathBuf> {
        let dir = self.config_dir(home);
        self.config_file_names()
            .iter()
            .map(|name| dir.join(name))
            .collect()
    }

    /// Get the default configuration file path for this dialect
    pub fn default_config_path(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        self.config_dir(&home).join(self.config_file_names()[0])
    }

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellDialect::Bash => "bash",
            ShellDialect::Zsh => "zsh",
            ShellDialect::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(ShellDialect::Bash),
            "zsh" => Ok(ShellDialect::Zsh),
            "fish" => Ok(ShellDialect::Fish),
            _ => Err(format!("Unknown shell dialect: {}", s)),
        }
    }
}

/// A shell dialect together with its discovered configuration files
#[derive(Debug, Clone)]
pub struct Shell {
    pub dialect: ShellDialect,
    pub config_files: Vec<ConfigFile>,
}

impl Shell {
    pub fn new(dialect: ShellDialect, config_files: Vec<ConfigFile>) -> Self {
        Self {
            dialect,
            config_files,
        }
    }

    pub fn name(&self) -> &'static str {
        self.dialect.name()
    }

    /// Configuration files that exist on disk
    pub fn existing_files(&self) -> impl Iterator<Item = &ConfigFile> {
        self.config_files.iter().filter(|f| f.exists)
    }
}
