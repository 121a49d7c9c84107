//! Core traits for the host abstraction layer

use std::path::Path;

use super::error::Result;
use super::output::MessageLevel;
use super::types::{ExecutionResult, SettingValue};

/// The file manager the commands run inside
///
/// The host owns the terminal and its UI state. Commands only ever talk to
/// it through this trait, so the same command code runs inside an embedding
/// file manager, the standalone terminal host, or a test double.
///
/// Methods take `&self`; hosts keep their mutable UI state behind interior
/// mutability, the way a file manager's settings object is shared with its
/// commands.
pub trait Host {
    /// Run a shell command in the foreground, capturing stdout and
    /// discarding stderr, and wait for it to finish
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned or its output
    /// cannot be read.
    fn execute(&self, shell_command: &str) -> Result<ExecutionResult>;

    /// Suspend the host UI, run `program` with `args`, then resume
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started.
    fn run_foreground(&self, program: &str, args: &[String]) -> Result<()>;

    /// Read a setting; `None` means the host does not support it
    fn get_setting(&self, name: &str) -> Option<SettingValue>;

    /// Change a setting
    ///
    /// # Errors
    ///
    /// Returns an error if the setting is unknown or the host's
    /// reconfiguration in response to the change fails.
    fn set_setting(&self, name: &str, value: SettingValue) -> Result<()>;

    /// Change the host's working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot enter `path`.
    fn change_directory(&self, path: &Path) -> Result<()>;

    /// Move the host's cursor to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot select `path`.
    fn select_file(&self, path: &Path) -> Result<()>;

    /// Ask the host to repaint its listing and status line
    fn request_redraw(&self);

    /// Show a message to the user
    fn notify(&self, message: &str, level: MessageLevel);
}
