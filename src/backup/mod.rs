//! Backup management module
//!
//! Backups are sibling files named `<original-path>.backup.<unix-seconds>`.

use anyhow::Result;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::editor::EditError;
use crate::model::Config;
use crate::utils::path::expand_tilde;

const BACKUP_MARKER: &str = ".backup.";
const MAX_NAME_ATTEMPTS: usize = 64;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub timestamp: i64,
    pub size: u64,
}

impl BackupEntry {
    /// Identifier accepted by [`BackupManager::restore_backup`]
    pub fn id(&self) -> String {
        self.timestamp.to_string()
    }

    /// Creation time as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub fn created(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Sibling backup path for `path` taken at `timestamp`
pub fn backup_path_for(path: &Path, timestamp: i64) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!("{}{}", BACKUP_MARKER, timestamp));
    PathBuf::from(name)
}

/// Copy `path` to `<path>.backup.<now>`.
///
/// An existing backup is never overwritten. When the name for this second is
/// taken by identical content that backup is returned, otherwise the next free
/// second is used.
pub fn create_backup(path: &Path) -> std::result::Result<PathBuf, EditError> {
    let path = expand_tilde(path);
    if !path.exists() {
        return Err(EditError::FileNotFound(path));
    }

    let failed = |err: std::io::Error| {
        debug!(path = %path.display(), error = %err, "backup copy failed");
        EditError::BackupFailed(path.clone())
    };

    let content = std::fs::read(&path).map_err(failed)?;
    let mut timestamp = OffsetDateTime::now_utc().unix_timestamp();

    for _ in 0..MAX_NAME_ATTEMPTS {
        let backup_path = backup_path_for(&path, timestamp);
        match OpenOptions::new().write(true).create_new(true).open(&backup_path) {
            Ok(mut file) => {
                file.write_all(&content).map_err(failed)?;
                info!(backup = %backup_path.display(), "created backup");
                return Ok(backup_path);
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                if std::fs::read(&backup_path).map_err(failed)? == content {
                    debug!(backup = %backup_path.display(), "identical backup already present");
                    return Ok(backup_path);
                }
                timestamp += 1;
            }
            Err(err) => return Err(failed(err)),
        }
    }

    Err(EditError::BackupFailed(path))
}

pub fn format_timestamp(timestamp: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|t| t.format(&format).ok())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Backup catalogue for one configuration file
pub struct BackupManager {
    target: PathBuf,
    max_count: usize,
}

impl BackupManager {
    pub fn new(target: &Path, config: &Config) -> Self {
        Self {
            target: expand_tilde(target),
            max_count: config.backup.max_count,
        }
    }

    /// Create a backup of the target file and prune old ones
    pub fn create_backup(&self) -> Result<PathBuf> {
        let backup_path = create_backup(&self.target)?;
        self.cleanup_old_backups()?;
        Ok(backup_path)
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        let Some(file_name) = self.target.file_name() else {
            return Ok(Vec::new());
        };
        let prefix = format!("{}{}", file_name.to_string_lossy(), BACKUP_MARKER);
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            let Some(timestamp) = name
                .strip_prefix(&prefix)
                .and_then(|ts| ts.parse::<i64>().ok())
            else {
                continue;
            };

            let size = entry.metadata()?.len();
            entries.push(BackupEntry {
                path: entry.path(),
                timestamp,
                size,
            });
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Get a specific backup by timestamp ID
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        Ok(backups.into_iter().find(|b| b.id() == id))
    }

    /// Restore a backup by timestamp ID
    pub fn restore_backup(&self, id: &str) -> Result<()> {
        let backup = self
            .get_backup(id)?
            .ok_or_else(|| anyhow::anyhow!("Backup not found: {}", id))?;

        // Read first: backing up the current state may land next to this backup
        let content = std::fs::read(&backup.path)?;

        // Keep the current state recoverable
        if self.target.exists() {
            create_backup(&self.target)?;
        }

        std::fs::write(&self.target, content)?;
        info!(from = %backup.path.display(), "restored backup");
        Ok(())
    }

    /// Clean up old backups, keeping the configured number
    pub fn cleanup_old_backups(&self) -> Result<usize> {
        self.cleanup_keep(self.max_count)
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }

        debug!(removed, keep, "pruned old backups");
        Ok(removed)
    }
}
