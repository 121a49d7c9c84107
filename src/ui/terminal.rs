//! Standalone terminal host
//!
//! Used by the `fzjump` binary when no file manager is embedding the
//! commands. Pipelines and editors share the caller's terminal; navigation
//! results are printed on stdout so a shell function can act on them:
//!
//! ```bash
//! fcd() { local dir; dir="$(fzjump dirs)" && [ -n "$dir" ] && cd "$dir"; }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use super::error::{HostError, Result};
use super::output::{MessageLevel, OutputWriter, StderrWriter};
use super::traits::Host;
use super::types::{ExecutionResult, SettingValue, settings};

/// Host backed by the invoking terminal
pub struct TerminalHost {
    shell: String,
    settings: RefCell<HashMap<String, SettingValue>>,
    output: Box<dyn OutputWriter>,
}

impl TerminalHost {
    /// Create a terminal host writing notifications to stderr
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(StderrWriter::new()))
    }

    /// Create a terminal host with a custom notification writer
    #[must_use]
    pub fn with_output(output: Box<dyn OutputWriter>) -> Self {
        let mut table = HashMap::new();
        table.insert(
            settings::LINEMODE.to_string(),
            SettingValue::Text("filename".to_string()),
        );
        table.insert(settings::VCS_AWARE.to_string(), SettingValue::Bool(false));
        table.insert(settings::PREVIEW_IMAGES.to_string(), SettingValue::Bool(false));
        table.insert(
            settings::PREVIEW_DIRECTORIES.to_string(),
            SettingValue::Bool(true),
        );

        Self {
            shell: "sh".to_string(),
            settings: RefCell::new(table),
            output,
        }
    }

    fn print_target(path: &Path) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", path.display())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Decode captured output, replacing invalid UTF-8
///
/// A path that needed replacement characters no longer names a real file,
/// so the loss is logged.
fn decode_stdout(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::warn!(
            valid_up_to = e.utf8_error().valid_up_to(),
            "pipeline output is not valid UTF-8, paths may not resolve"
        );
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TerminalHost {
    fn execute(&self, shell_command: &str) -> Result<ExecutionResult> {
        tracing::debug!(command = shell_command, "executing pipeline");

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(shell_command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| HostError::SpawnError {
                program: self.shell.clone(),
                source,
            })?;

        Ok(ExecutionResult::new(
            output.status.code().unwrap_or(-1),
            &decode_stdout(output.stdout),
        ))
    }

    fn run_foreground(&self, program: &str, args: &[String]) -> Result<()> {
        tracing::debug!(program, ?args, "running in foreground");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| HostError::SpawnError {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            tracing::debug!(program, code = ?status.code(), "foreground program exited non-zero");
        }
        Ok(())
    }

    fn get_setting(&self, name: &str) -> Option<SettingValue> {
        self.settings.borrow().get(name).cloned()
    }

    fn set_setting(&self, name: &str, value: SettingValue) -> Result<()> {
        let mut table = self.settings.borrow_mut();
        match table.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(HostError::UnsupportedSetting(name.to_string())),
        }
    }

    fn change_directory(&self, path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(HostError::NavigationError(path.display().to_string()));
        }
        Self::print_target(path)
    }

    fn select_file(&self, path: &Path) -> Result<()> {
        Self::print_target(path)
    }

    fn request_redraw(&self) {
        // Nothing is drawn between commands in a plain terminal.
    }

    fn notify(&self, message: &str, level: MessageLevel) {
        self.output.emit(level, message);
    }
}
