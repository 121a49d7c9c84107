//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: fuzzy pick a file or directory (default)
//! - **dirs**: fuzzy pick a directory
//! - **grep**: search file contents and open the chosen hit in an editor
//! - **config**: inspect the effective configuration
//! - **completions**: print a shell completion script
//!
//! # Examples
//!
//! ```
//! use fzjump::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["fzjump", "grep", "fn", "main"]);
//! assert_eq!(cli.get_command().grep_pattern(), Some("fn main".to_string()));
//! ```

use std::io::Write;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the configuration file
    Path,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fuzzy pick a file or directory below the current directory (default)
    #[command(visible_alias = "p")]
    Pick,

    /// Fuzzy pick a directory below the current directory
    #[command(visible_alias = "d")]
    Dirs,

    /// Search file contents and open the chosen line in $VISUAL/$EDITOR
    #[command(visible_alias = "g")]
    Grep {
        /// Pattern handed to ripgrep (defaults to every line)
        #[arg(value_name = "PATTERN", trailing_var_arg = true, allow_hyphen_values = true)]
        pattern: Vec<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Pattern words of `grep`, joined with spaces
    #[must_use]
    pub fn grep_pattern(&self) -> Option<String> {
        match self {
            Self::Grep { pattern } => Some(pattern.join(" ")),
            _ => None,
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fzjump")]
#[command(about = "Fuzzy jump to files, directories and lines", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only report errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log pipeline activity to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to `pick` if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick)
    }
}

/// Write a completion script for `shell` to `buf`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
