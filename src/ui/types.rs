//! Value types exchanged with the host

use std::fmt;

/// Names of the host settings the fast-UI scope manipulates
pub mod settings {
    /// Per-directory display mode (icons, sizes, ...)
    pub const LINEMODE: &str = "linemode";
    /// Version-control decoration of listings
    pub const VCS_AWARE: &str = "vcs_aware";
    /// Image previews in the preview pane
    pub const PREVIEW_IMAGES: &str = "preview_images";
    /// Directory-content previews
    pub const PREVIEW_DIRECTORIES: &str = "preview_directories";
}

/// Value of a host setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean flag
    Bool(bool),
    /// Free-form text (e.g. a linemode name)
    Text(String),
}

impl SettingValue {
    /// Boolean view of the value; text values are never truthy
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Text view of the value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Outcome of a shell command run by the host
///
/// Standard error is never captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Process exit code (`-1` when terminated by a signal)
    pub exit_code: i32,
    /// Captured standard output, trimmed
    pub stdout: String,
}

impl ExecutionResult {
    /// Build a result, trimming surrounding whitespace from stdout
    #[must_use]
    pub fn new(exit_code: i32, stdout: &str) -> Self {
        Self {
            exit_code,
            stdout: stdout.trim().to_string(),
        }
    }

    /// Whether the command exited with status zero
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}
