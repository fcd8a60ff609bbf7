//! # Editor Module
//!
//! Line-addressed edits of shell configuration files.
//!
//! Every operation is a whole-file read-modify-write: the file is read,
//! split on `\n`, the line vector is changed, and the joined text is
//! written to a temporary file in the same directory which then replaces
//! the original. Readers see either the old or the new content, never a
//! partial write. Nothing is cached between calls; re-parse the file after
//! editing it.
//!
//! Line numbers are 1-based indices into the `\n`-split text, the same
//! numbering the parser assigns.

mod error;
pub mod render;

pub use error::EditError;
pub use render::render;

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::model::{default_header_comment, Config, ShellDialect, Statement};
use crate::utils::path::expand_tilde;
use crate::utils::strings::split_lines;

pub type Result<T> = std::result::Result<T, EditError>;

/// Applies statement-level edits to configuration files.
#[derive(Debug, Clone)]
pub struct FileEditor {
    header_comment: String,
}

impl FileEditor {
    pub fn new() -> Self {
        Self {
            header_comment: default_header_comment(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            header_comment: config.editor.header_comment.clone(),
        }
    }

    /// Append `statement` at the end of the file.
    pub fn append(&self, statement: &Statement, path: impl AsRef<Path>) -> Result<()> {
        let path = expand_tilde(path);
        let mut content = read_file(&path)?;

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&render(statement));
        content.push('\n');

        debug!(path = %path.display(), name = %statement.name, "append");
        write_file(&path, &content)
    }

    /// Insert `statement` after line `after_line` (0 inserts at the top).
    ///
    /// Positions past the end are clamped to the end of the file.
    pub fn insert(&self, statement: &Statement, path: impl AsRef<Path>, after_line: usize) -> Result<()> {
        self.edit_lines(path, |lines| {
            let index = after_line.min(lines.len());
            lines.insert(index, render(statement));
            Ok(())
        })
    }

    /// Delete a single line.
    pub fn delete(&self, line_number: usize, path: impl AsRef<Path>) -> Result<()> {
        self.edit_lines(path, |lines| {
            check_line(line_number, lines.len())?;
            lines.remove(line_number - 1);
            Ok(())
        })
    }

    /// Replace a single line with the rendering of `statement`.
    pub fn update(&self, line_number: usize, path: impl AsRef<Path>, statement: &Statement) -> Result<()> {
        self.update_range(line_number, line_number, path, statement)
    }

    /// Replace the inclusive line range `start..=end` with the rendering of
    /// `statement`. Used to rewrite a whole multi-line function.
    pub fn update_range(
        &self,
        start: usize,
        end: usize,
        path: impl AsRef<Path>,
        statement: &Statement,
    ) -> Result<()> {
        self.edit_lines(path, |lines| {
            check_line(start, lines.len())?;
            check_line(end, lines.len())?;
            if end < start {
                return Err(EditError::InvalidLineNumber {
                    line: end,
                    line_count: lines.len(),
                });
            }
            lines.splice(start - 1..end, std::iter::once(render(statement)));
            Ok(())
        })
    }

    /// Delete several lines at once.
    ///
    /// Lines are removed from the highest number down so earlier removals
    /// never shift later ones. Numbers outside the file are skipped.
    pub fn delete_many(
        &self,
        line_numbers: impl IntoIterator<Item = usize>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let line_numbers: BTreeSet<usize> = line_numbers.into_iter().collect();
        self.edit_lines(path, |lines| {
            for &line_number in line_numbers.iter().rev() {
                if line_number == 0 || line_number > lines.len() {
                    debug!(line_number, "skipping out-of-range line");
                    continue;
                }
                lines.remove(line_number - 1);
            }
            Ok(())
        })
    }

    /// Create a configuration file holding only the header comment.
    ///
    /// Parent directories are created as needed. An existing file is replaced.
    pub fn create_file(&self, path: impl AsRef<Path>, shell_dialect: ShellDialect) -> Result<()> {
        let path = expand_tilde(path);
        let to_write_error = |err: std::io::Error| {
            debug!(path = %path.display(), error = %err, "create failed");
            EditError::WriteError(path.clone())
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        atomic_write(&path, &format!("{}\n", self.header_comment)).map_err(to_write_error)?;

        info!(path = %path.display(), dialect = %shell_dialect, "created config file");
        Ok(())
    }

    /// Delete a configuration file.
    pub fn delete_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = expand_tilde(path);
        if !path.exists() {
            return Err(EditError::FileNotFound(path));
        }
        std::fs::remove_file(&path).map_err(|_| EditError::WriteError(path.clone()))?;
        info!(path = %path.display(), "deleted config file");
        Ok(())
    }

    /// Copy the file to `<path>.backup.<unix-seconds>` and return the copy's path.
    pub fn backup(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        crate::backup::create_backup(path.as_ref())
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        expand_tilde(path).exists()
    }

    fn edit_lines<F>(&self, path: impl AsRef<Path>, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<String>) -> Result<()>,
    {
        let path = expand_tilde(path);
        let content = read_file(&path)?;
        let mut lines: Vec<String> = split_lines(&content).into_iter().map(String::from).collect();

        edit(&mut lines)?;

        debug!(path = %path.display(), lines = lines.len(), "rewrite");
        write_file(&path, &lines.join("\n"))
    }
}

impl Default for FileEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn check_line(line_number: usize, line_count: usize) -> Result<()> {
    if line_number == 0 || line_number > line_count {
        return Err(EditError::InvalidLineNumber {
            line: line_number,
            line_count,
        });
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|err| EditError::from_read(err, path))?;
    String::from_utf8(bytes).map_err(|_| EditError::ReadError(path.to_path_buf()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    // Write through symlinks (dotfile managers) instead of replacing them
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if let Ok(metadata) = std::fs::metadata(&target) {
        if metadata.permissions().readonly() {
            return Err(EditError::PermissionDenied(path.to_path_buf()));
        }
    }

    atomic_write(&target, content).map_err(|err| EditError::from_write(err, path))
}

/// Write `data` to a temp file next to `path`, then rename it over `path`.
fn atomic_write(path: &Path, data: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
