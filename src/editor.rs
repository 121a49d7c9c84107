//! Opening a file at a line in the user's editor
//!
//! Editors disagree on how to say "open this file at line N". The dialect
//! is picked from the editor's lowercase base executable name through
//! [`DIALECTS`]; supporting another editor means adding a row there.

use std::path::Path;

use crate::parser::LineNumber;
use crate::pipeline::{self, Stage};
use crate::ui::Host;

/// Editor used when neither `VISUAL` nor `EDITOR` is set
pub const DEFAULT_EDITOR: &str = "nvim";

/// Environment lookup used to find the editor
pub type EnvLookup = fn(&str) -> Option<String>;

/// Read a variable from the process environment
#[must_use]
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Command-line shape for "open at line"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorDialect {
    /// `<editor> +<line> <path>`
    LineFlag,
    /// `<editor> <path>:<line>`
    ColonSuffix,
    /// `<editor> -g <path>:<line>`
    GotoFlag,
}

/// Known editors by base executable name
pub const DIALECTS: &[(&str, EditorDialect)] = &[
    ("nvim", EditorDialect::LineFlag),
    ("vim", EditorDialect::LineFlag),
    ("vi", EditorDialect::LineFlag),
    ("micro", EditorDialect::LineFlag),
    ("nano", EditorDialect::LineFlag),
    ("kak", EditorDialect::LineFlag),
    ("emacs", EditorDialect::LineFlag),
    ("hx", EditorDialect::ColonSuffix),
    ("helix", EditorDialect::ColonSuffix),
    ("subl", EditorDialect::ColonSuffix),
    ("sublime_text", EditorDialect::ColonSuffix),
    ("zed", EditorDialect::ColonSuffix),
    ("code", EditorDialect::GotoFlag),
    ("code-insiders", EditorDialect::GotoFlag),
    ("codium", EditorDialect::GotoFlag),
];

impl EditorDialect {
    /// Dialect for an editor base name; unknown editors get `+<line>`
    #[must_use]
    pub fn for_base_name(name: &str) -> Self {
        let name = name.to_lowercase();
        DIALECTS
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(Self::LineFlag, |(_, dialect)| *dialect)
    }

    /// Arguments opening `path` at `line`
    #[must_use]
    pub fn args(self, path: &str, line: LineNumber) -> Vec<String> {
        match self {
            Self::LineFlag => vec![format!("+{line}"), path.to_string()],
            Self::ColonSuffix => vec![format!("{path}:{line}")],
            Self::GotoFlag => vec!["-g".to_string(), format!("{path}:{line}")],
        }
    }
}

/// Where the editor command comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// `VISUAL`
    pub visual: Option<String>,
    /// `EDITOR`
    pub editor: Option<String>,
    /// Configured fallback
    pub fallback: String,
}

impl EditorSettings {
    /// Read `VISUAL` and `EDITOR` through `lookup`
    #[must_use]
    pub fn from_lookup(lookup: EnvLookup, fallback: &str) -> Self {
        Self {
            visual: lookup("VISUAL"),
            editor: lookup("EDITOR"),
            fallback: fallback.to_string(),
        }
    }

    /// First non-empty of `VISUAL`, `EDITOR`, the fallback, then
    /// [`DEFAULT_EDITOR`]
    #[must_use]
    pub fn command(&self) -> &str {
        [
            self.visual.as_deref(),
            self.editor.as_deref(),
            Some(self.fallback.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_EDITOR)
    }
}

/// A ready-to-run editor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInvocation {
    /// Editor executable
    pub program: String,
    /// Arguments, each a single token
    pub args: Vec<String>,
    /// Dialect the arguments follow
    pub dialect: EditorDialect,
}

impl EditorInvocation {
    /// Build the invocation for `editor_command` (which may carry its own
    /// arguments, e.g. `code --wait`)
    #[must_use]
    pub fn build(editor_command: &str, path: &Path, line: LineNumber) -> Self {
        let mut tokens = shlex::split(editor_command)
            .unwrap_or_else(|| editor_command.split_whitespace().map(ToString::to_string).collect());
        if tokens.is_empty() {
            tokens.push(DEFAULT_EDITOR.to_string());
        }
        let program = tokens.remove(0);

        let base = Path::new(&program)
            .file_name()
            .map_or_else(|| program.clone(), |name| name.to_string_lossy().into_owned());
        let dialect = EditorDialect::for_base_name(&base);
        tracing::debug!(editor = %program, ?dialect, "selected editor dialect");

        let mut args = tokens;
        args.extend(dialect.args(&path.to_string_lossy(), line));

        Self {
            program,
            args,
            dialect,
        }
    }

    /// Shell-quoted rendering of the command
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Unquotable` if a token contains a NUL byte.
    pub fn command_line(&self) -> pipeline::Result<String> {
        Stage::new(self.program.as_str())
            .args(self.args.iter().cloned())
            .to_shell()
    }

    /// Run the editor in the host's foreground
    ///
    /// Returns whether the editor could be started. Failures are logged,
    /// not shown.
    pub fn launch<H: Host + ?Sized>(&self, host: &H) -> bool {
        match host.run_foreground(&self.program, &self.args) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(editor = %self.program, error = %e, "editor failed to start");
                false
            }
        }
    }
}

/// Open `path` at `line` in the configured editor and return what ran
pub fn open_at_line<H: Host + ?Sized>(
    host: &H,
    settings: &EditorSettings,
    path: &Path,
    line: LineNumber,
) -> EditorInvocation {
    let invocation = EditorInvocation::build(settings.command(), path, line);
    invocation.launch(host);
    invocation
}
