//! Configuration file discovery
//!
//! [`ConfigRepository`] looks up every candidate startup file of each dialect
//! under a home directory, parses the ones that exist and keeps the result
//! until the next [`ConfigRepository::reload`]. Nothing is patched in place:
//! after an edit, call `reload()` (or [`ConfigRepository::load_file`]) again.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::model::{ConfigFile, Shell, ShellDialect, Statement, StatementKind};
use crate::parser::{StatementParser, FILE_NOT_FOUND};
use crate::search;

pub struct ConfigRepository {
    home: PathBuf,
    parser: StatementParser,
    shells: Vec<Shell>,
}

impl ConfigRepository {
    /// Repository rooted at the current user's home directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("Cannot determine home directory")?;
        Ok(Self::with_home(home))
    }

    /// Repository rooted at an arbitrary directory. Nothing is read until
    /// [`reload`](Self::reload) is called.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            parser: StatementParser::new(),
            shells: Vec::new(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Rediscover and re-parse every candidate file, replacing all previous results.
    pub fn reload(&mut self) {
        self.shells = ShellDialect::ALL
            .into_iter()
            .map(|dialect| {
                let mut files: Vec<ConfigFile> = dialect
                    .candidate_paths(&self.home)
                    .into_iter()
                    .map(|path| self.load_file(path, dialect))
                    .collect();
                // Existing files first, candidate order otherwise
                files.sort_by_key(|f| !f.exists);
                Shell::new(dialect, files)
            })
            .collect();

        info!(
            home = %self.home.display(),
            files = self.existing_files().count(),
            statements = self.total_count(),
            "reloaded shell configuration"
        );
    }

    /// Parse a single file into a fresh [`ConfigFile`].
    ///
    /// Missing files are reported through `exists`, not `parse_error`.
    pub fn load_file(&self, path: impl Into<PathBuf>, dialect: ShellDialect) -> ConfigFile {
        let mut file = ConfigFile::new(path, dialect);

        let Ok(metadata) = std::fs::metadata(&file.path) else {
            debug!(path = %file.path.display(), "candidate not present");
            return file;
        };
        file.exists = true;
        file.last_modified = metadata.modified().ok().map(OffsetDateTime::from);

        let outcome = self.parser.parse_file(&file.path);
        file.statements = outcome.statements;
        file.parse_error = outcome.error.filter(|e| e != FILE_NOT_FOUND);
        file
    }

    /// Every dialect with its candidate files, as of the last reload.
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    /// Candidate files of one dialect.
    pub fn list(&self, dialect: ShellDialect) -> &[ConfigFile] {
        self.shells
            .iter()
            .find(|s| s.dialect == dialect)
            .map(|s| s.config_files.as_slice())
            .unwrap_or(&[])
    }

    pub fn existing_files(&self) -> impl Iterator<Item = &ConfigFile> {
        self.shells.iter().flat_map(|s| s.existing_files())
    }

    /// Statements of every existing file, file by file.
    pub fn all_statements(&self) -> Vec<&Statement> {
        self.existing_files()
            .flat_map(|f| f.statements.iter())
            .collect()
    }

    /// Search one file (when `file` is given) or every discovered file.
    pub fn search(&self, query: &str, kinds: &[StatementKind], file: Option<&Path>) -> Vec<Statement> {
        let statements: Vec<Statement> = self
            .existing_files()
            .filter(|f| file.map_or(true, |p| f.path == p))
            .flat_map(|f| f.statements.iter().cloned())
            .collect();
        search::filter(&statements, query, kinds)
    }

    /// Distinct statement names across all files, sorted.
    pub fn unique_names(&self) -> BTreeSet<String> {
        self.all_statements()
            .into_iter()
            .filter(|s| !s.name.is_empty())
            .map(|s| s.name.clone())
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.existing_files().map(|f| f.statements.len()).sum()
    }
}
