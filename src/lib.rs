//! fzjump - fuzzy jumping for file managers
//!
//! Commands that let a file manager's user fuzzy-pick a file or directory,
//! or fuzzy-search file contents, using fd/find, ripgrep and fzf, then hand
//! the result back to the host: change directory, select a file, or open
//! an editor at the matching line.
//!
//! The file manager is reached only through the [`ui::Host`] trait. The
//! `fzjump` binary ships a [`ui::TerminalHost`] for use straight from a
//! shell.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod exclusions;
pub mod executor;
pub mod fast_ui;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod probe;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the binary
///
/// Commands never fail; only configuration loading and writing to stdout
/// can.
#[derive(Debug, Error)]
pub enum FzjumpError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
