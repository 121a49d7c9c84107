//! Testing utilities for fzjump
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

use crate::pipeline::Stage;
use crate::probe;
use crate::ui::TerminalHost;

/// Temporary directory tree that is removed on drop
///
/// # Examples
/// ```ignore
/// let tree = TestTree::new();
/// let file = tree.file("src/main.rs");
/// assert!(file.is_file());
/// ```
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and its parents) with default content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "test content\n").expect("Failed to write test file");
        path
    }

    /// Create a directory (and its parents)
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create test dir");
        path
    }

    /// Run a producer stage from the tree root and collect its lines
    ///
    /// Standard input is closed so tools like ripgrep search the tree
    /// instead of reading stdin.
    ///
    /// # Panics
    /// Panics if the stage cannot be rendered or run.
    pub fn run(&self, stage: &Stage) -> Vec<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(stage.to_shell().expect("Stage renders"))
            .current_dir(self.dir.path())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .expect("Shell runs");

        let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(ToString::to_string)
            .collect();
        lines.sort();
        lines
    }
}

/// Whether `tool` is installed on this machine
pub fn installed(tool: &str) -> bool {
    probe::have(&TerminalHost::new(), tool)
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
