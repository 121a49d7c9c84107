//! Structured shell pipelines
//!
//! A pipeline is a producer stage (a finder or a grep tool) piped into an
//! interactive filter stage. Stages stay as program + argument vectors until
//! the very end, where [`Pipeline::to_shell`] quotes every token and joins
//! them into the single string the host's shell executes.

mod error;
pub mod finder;
pub mod grep;

pub use error::{PipelineError, Result};
pub use finder::{EntryKind, FastFinder, finder_stage};
pub use grep::{DEFAULT_PATTERN, RG, grep_stage};

use serde::{Deserialize, Serialize};

/// One command in a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Executable name
    pub program: String,
    /// Arguments, unquoted
    pub args: Vec<String>,
}

impl Stage {
    /// Create a stage with no arguments
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as one shell-quoted command
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Unquotable` if a token contains a NUL byte.
    pub fn to_shell(&self) -> Result<String> {
        let tokens = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(tokens).map_err(|e| PipelineError::Unquotable {
            program: self.program.clone(),
            reason: e.to_string(),
        })
    }
}

/// Fixed UX flags handed to the interactive filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Pane height (`None` = full screen)
    pub height: Option<String>,
    /// List grows top-down under the prompt
    pub reverse: bool,
    /// Draw a border around the pane
    pub border: bool,
    /// Wrap around at the ends of the list
    pub cycle: bool,
    /// Accept immediately when exactly one candidate is left
    pub select_one: bool,
    /// Exit immediately when there are no candidates
    pub exit_zero: bool,
    /// Extra flags appended verbatim
    pub extra: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            height: Some("80%".to_string()),
            reverse: true,
            border: true,
            cycle: true,
            select_one: true,
            exit_zero: true,
            extra: Vec::new(),
        }
    }
}

impl FilterOptions {
    /// Command-line flags in fzf syntax
    ///
    /// Option values are separate tokens so the rendered pipeline only
    /// quotes what needs quoting.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(height) = &self.height {
            args.push("--height".to_string());
            args.push(height.clone());
        }
        let toggles = [
            (self.reverse, "--reverse"),
            (self.border, "--border"),
            (self.cycle, "--cycle"),
            (self.select_one, "--select-1"),
            (self.exit_zero, "--exit-0"),
        ];
        args.extend(
            toggles
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| flag.to_string()),
        );
        args.extend(self.extra.iter().cloned());
        args
    }

    /// Filter stage running `program` with these options
    #[must_use]
    pub fn stage(&self, program: &str) -> Stage {
        Stage::new(program).args(self.to_args())
    }
}

/// Producer piped into an interactive filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// Stage that writes candidate lines
    pub producer: Stage,
    /// Interactive filter reading the candidates
    pub filter: Stage,
}

impl Pipeline {
    /// Pipe `producer` into `filter`
    #[must_use]
    pub const fn new(producer: Stage, filter: Stage) -> Self {
        Self { producer, filter }
    }

    /// Render the whole pipeline for `sh -c`
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Unquotable` if any stage cannot be quoted.
    pub fn to_shell(&self) -> Result<String> {
        Ok(format!(
            "{} | {}",
            self.producer.to_shell()?,
            self.filter.to_shell()?
        ))
    }
}
