//! A parsed configuration file

use std::path::{Path, PathBuf};
use time::OffsetDateTime;

use super::{ShellDialect, Statement};
use crate::utils::path::display_path;

/// One shell configuration file and the statements recovered from it.
///
/// Built from scratch on every reload; never patched in place.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub shell_dialect: ShellDialect,
    pub statements: Vec<Statement>,
    pub exists: bool,
    pub last_modified: Option<OffsetDateTime>,
    pub parse_error: Option<String>,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>, shell_dialect: ShellDialect) -> Self {
        Self {
            path: path.into(),
            shell_dialect,
            statements: Vec::new(),
            exists: false,
            last_modified: None,
            parse_error: None,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn directory_path(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Path with the home directory collapsed to `~`
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }

    /// Statement starting at the given 1-based line, if any
    pub fn statement_at(&self, line_number: usize) -> Option<&Statement> {
        self.statements
            .iter()
            .find(|s| s.line_number == line_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatementKind;

    #[test]
    fn test_file_name_and_directory() {
        let file = ConfigFile::new("/home/u/.config/fish/config.fish", ShellDialect::Fish);
        assert_eq!(file.file_name(), "config.fish");
        assert_eq!(file.directory_path(), Path::new("/home/u/.config/fish"));
        assert!(!file.exists);
    }

    #[test]
    fn test_statement_at() {
        let mut file = ConfigFile::new("/tmp/.bashrc", ShellDialect::Bash);
        file.statements = vec![
            Statement::variable("A", "1").with_line_number(1),
            Statement::alias("ll", "ls -la").with_line_number(3),
        ];
        assert_eq!(file.statement_at(3).unwrap().kind, StatementKind::Alias);
        assert!(file.statement_at(2).is_none());
    }
}
