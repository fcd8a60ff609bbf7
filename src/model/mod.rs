//! Core data models for shellcfg

mod config;
mod config_file;
mod shell;
mod statement;

pub use config::{BackupConfig, Config, EditorConfig, UiConfig};
pub(crate) use config::default_header_comment;
pub use config_file::ConfigFile;
pub use shell::{Shell, ShellDialect};
pub use statement::{Statement, StatementKind};
