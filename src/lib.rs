//! shellcfg - Shell Configuration File Editor
//!
//! Reads Bash, Zsh and Fish startup files into typed statements and applies
//! line-precise edits back to them.
//!
//! # Features
//!
//! - Parse variables, exports, aliases, functions and source directives
//! - Discover every dialect's startup files under the home directory
//! - Search statements by name, value or comment
//! - Append, insert, update and delete statements with atomic writes
//! - Create and delete configuration files
//! - Automatic timestamped backups

pub mod backup;
pub mod cli;
pub mod config;
pub mod editor;
pub mod model;
pub mod parser;
pub mod repository;
pub mod search;
pub mod utils;

pub use editor::{EditError, FileEditor};
pub use model::{Config, ConfigFile, Shell, ShellDialect, Statement, StatementKind};
pub use parser::{ParseOutcome, ParseResult, StatementParser};
pub use repository::ConfigRepository;
