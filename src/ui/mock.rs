//! Mock host for testing

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::{HostError, Result};
use super::output::MessageLevel;
use super::traits::Host;
use super::types::{ExecutionResult, SettingValue, settings};

/// Host double that records every interaction and replays scripted
/// command results
///
/// Commands are matched against scripted responses by prefix, first match
/// wins. Unscripted commands exit with status 1 and no output, which is how
/// `command -v` reports a missing tool.
#[derive(Debug, Default)]
pub struct MockHost {
    responses: RefCell<Vec<(String, ExecutionResult)>>,
    settings: RefCell<HashMap<String, SettingValue>>,
    failing_writes: RefCell<Vec<(String, SettingValue)>>,
    /// Every shell command passed to `execute`, in order
    pub executed: RefCell<Vec<String>>,
    /// Every `run_foreground` call, in order
    pub foreground: RefCell<Vec<(String, Vec<String>)>>,
    /// Every successful and failed setting write, in order
    pub setting_writes: RefCell<Vec<(String, SettingValue)>>,
    /// Directories the host was asked to enter
    pub directories: RefCell<Vec<PathBuf>>,
    /// Files the host was asked to select
    pub selections: RefCell<Vec<PathBuf>>,
    /// Notifications shown to the user
    pub notifications: RefCell<Vec<(String, MessageLevel)>>,
    /// Number of redraw requests
    pub redraws: Cell<usize>,
}

impl MockHost {
    /// Create a mock host with no settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock host carrying a typical file-manager settings table
    #[must_use]
    pub fn with_default_settings() -> Self {
        let host = Self::new();
        host.seed_setting(settings::LINEMODE, SettingValue::Text("devicons".into()));
        host.seed_setting(settings::VCS_AWARE, SettingValue::Bool(true));
        host.seed_setting(settings::PREVIEW_IMAGES, SettingValue::Bool(true));
        host.seed_setting(settings::PREVIEW_DIRECTORIES, SettingValue::Bool(true));
        host
    }

    /// Store a setting without recording a write
    pub fn seed_setting(&self, name: &str, value: SettingValue) {
        self.settings.borrow_mut().insert(name.to_string(), value);
    }

    /// Script the result of any command starting with `prefix`
    pub fn respond(&self, prefix: &str, exit_code: i32, stdout: &str) {
        self.responses
            .borrow_mut()
            .push((prefix.to_string(), ExecutionResult::new(exit_code, stdout)));
    }

    /// Make writing exactly `value` to `name` fail
    pub fn fail_write(&self, name: &str, value: SettingValue) {
        self.failing_writes
            .borrow_mut()
            .push((name.to_string(), value));
    }

    /// Snapshot of the current settings table
    #[must_use]
    pub fn settings_snapshot(&self) -> HashMap<String, SettingValue> {
        self.settings.borrow().clone()
    }

    /// Whether any executed command contains `needle`
    #[must_use]
    pub fn ran(&self, needle: &str) -> bool {
        self.executed.borrow().iter().any(|cmd| cmd.contains(needle))
    }
}

impl Host for MockHost {
    fn execute(&self, shell_command: &str) -> Result<ExecutionResult> {
        self.executed.borrow_mut().push(shell_command.to_string());
        let responses = self.responses.borrow();
        Ok(responses
            .iter()
            .find(|(prefix, _)| shell_command.starts_with(prefix.as_str()))
            .map_or_else(|| ExecutionResult::new(1, ""), |(_, result)| result.clone()))
    }

    fn run_foreground(&self, program: &str, args: &[String]) -> Result<()> {
        self.foreground
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        Ok(())
    }

    fn get_setting(&self, name: &str) -> Option<SettingValue> {
        self.settings.borrow().get(name).cloned()
    }

    fn set_setting(&self, name: &str, value: SettingValue) -> Result<()> {
        self.setting_writes
            .borrow_mut()
            .push((name.to_string(), value.clone()));

        let fails = self
            .failing_writes
            .borrow()
            .iter()
            .any(|(n, v)| n == name && *v == value);
        if fails {
            return Err(HostError::SettingRejected {
                name: name.to_string(),
                reason: "scripted failure".to_string(),
            });
        }

        self.settings.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }

    fn change_directory(&self, path: &Path) -> Result<()> {
        self.directories.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn select_file(&self, path: &Path) -> Result<()> {
        self.selections.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn notify(&self, message: &str, level: MessageLevel) {
        self.notifications
            .borrow_mut()
            .push((message.to_string(), level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_scripted_response() {
        let host = MockHost::new();
        host.respond("command -v rg", 0, "/usr/bin/rg\n");

        let result = host.execute("command -v rg").unwrap();
        assert!(result.success());
        assert_eq!(result.stdout, "/usr/bin/rg");
        assert!(host.ran("command -v rg"));
    }

    #[test]
    fn test_mock_host_unscripted_command_fails() {
        let host = MockHost::new();
        let result = host.execute("command -v fd").unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn test_mock_host_failing_write_keeps_old_value() {
        let host = MockHost::with_default_settings();
        host.fail_write(settings::VCS_AWARE, SettingValue::Bool(false));

        assert!(
            host.set_setting(settings::VCS_AWARE, SettingValue::Bool(false))
                .is_err()
        );
        assert_eq!(
            host.get_setting(settings::VCS_AWARE),
            Some(SettingValue::Bool(true))
        );
        assert_eq!(host.setting_writes.borrow().len(), 1);
    }
}
