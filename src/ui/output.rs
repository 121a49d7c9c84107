//! Output abstraction layer
//!
//! Notifications from commands end up here. Standard output is reserved for
//! the chosen path (so a shell wrapper can capture it), which is why the CLI
//! writer prints everything to stderr.

use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use fzjump::ui::output::{OutputWriter, StderrWriter};
///
/// let output = StderrWriter::new();
/// output.error("ripgrep (rg) not found in PATH");
/// output.info("nothing selected");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Dispatch on a message level
    fn emit(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => self.write(message),
            MessageLevel::Error => self.error(message),
            MessageLevel::Success => self.success(message),
            MessageLevel::Warning => self.warning(message),
            MessageLevel::Info => self.info(message),
        }
    }
}

/// CLI implementation - colored output on stderr
pub struct StderrWriter {
    quiet: bool,
}

impl StderrWriter {
    /// Create a new stderr writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that only lets errors through
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StderrWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message (blocking notification in a file manager)
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

impl MessageLevel {
    /// Whether a file manager should show this as a "bad" notification
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        lines: Mutex<Vec<(MessageLevel, String)>>,
    }

    impl OutputWriter for Recorder {
        fn write(&self, message: &str) {
            self.lines.lock().unwrap().push((MessageLevel::Normal, message.to_string()));
        }
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push((MessageLevel::Error, message.to_string()));
        }
        fn success(&self, message: &str) {
            self.lines.lock().unwrap().push((MessageLevel::Success, message.to_string()));
        }
        fn warning(&self, message: &str) {
            self.lines.lock().unwrap().push((MessageLevel::Warning, message.to_string()));
        }
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push((MessageLevel::Info, message.to_string()));
        }
    }

    #[test]
    fn test_stderr_writer_creation() {
        let _writer = StderrWriter::new();
        let _writer2 = StderrWriter::default();
        let _quiet = StderrWriter::quiet();
    }

    #[test]
    fn test_emit_dispatches_by_level() {
        let recorder = Recorder::default();
        recorder.emit(MessageLevel::Error, "boom");
        recorder.emit(MessageLevel::Info, "fyi");

        let lines = recorder.lines.lock().unwrap();
        assert_eq!(lines[0], (MessageLevel::Error, "boom".to_string()));
        assert_eq!(lines[1], (MessageLevel::Info, "fyi".to_string()));
    }

    #[test]
    fn test_message_level_is_error() {
        assert!(MessageLevel::Error.is_error());
        assert!(!MessageLevel::Warning.is_error());
    }
}
