//! Command implementations
//!
//! Each command is a module with an `execute` function that takes a host
//! and the shared [`CommandContext`] and runs one fuzzy-pick interaction.
//! Commands never return errors: anything that goes wrong is logged and
//! the command becomes a no-op, except a missing ripgrep, which is shown
//! to the user.

pub mod grep;
pub mod pick;
pub mod pick_dir;

pub use grep::execute as grep;
pub use pick::execute as pick;
pub use pick_dir::execute as pick_dir;

use std::path::{Path, PathBuf};

use crate::config::FzjumpConfig;
use crate::editor::{EditorInvocation, EnvLookup, process_env};
use crate::exclusions::ExclusionSet;
use crate::executor::{self, Selection};
use crate::fast_ui::with_fast_ui;
use crate::pipeline::{FilterOptions, Pipeline, Stage};
use crate::ui::Host;

/// Interactive filter used when nothing is configured
pub const DEFAULT_FILTER_PROGRAM: &str = "fzf";

/// Everything a command needs besides the host
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Paths skipped by every finder and by grep
    pub exclusions: ExclusionSet,
    /// Interactive filter executable
    pub filter_program: String,
    /// Interactive filter flags
    pub filter: FilterOptions,
    /// Editor used when `VISUAL` and `EDITOR` are unset
    pub fallback_editor: String,
    /// Lighten the host UI while finders run
    pub fast_ui: bool,
    /// Where `VISUAL` and `EDITOR` are read from
    pub env: EnvLookup,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            exclusions: ExclusionSet::default(),
            filter_program: DEFAULT_FILTER_PROGRAM.to_string(),
            filter: FilterOptions::default(),
            fallback_editor: crate::editor::DEFAULT_EDITOR.to_string(),
            fast_ui: true,
            env: process_env,
        }
    }
}

impl From<&FzjumpConfig> for CommandContext {
    fn from(config: &FzjumpConfig) -> Self {
        Self {
            exclusions: config.exclusion_set(),
            filter_program: config.filter_program.clone(),
            filter: config.filter.clone(),
            fallback_editor: config.editor.fallback.clone(),
            fast_ui: config.fast_ui,
            env: process_env,
        }
    }
}

impl CommandContext {
    /// Interactive filter stage with the configured flags
    #[must_use]
    pub fn filter_stage(&self) -> Stage {
        self.filter.stage(&self.filter_program)
    }

    /// Pipe `producer` into the interactive filter
    #[must_use]
    pub fn pipeline(&self, producer: Stage) -> Pipeline {
        Pipeline::new(producer, self.filter_stage())
    }

    /// Run a finder pipeline, inside the fast-UI scope when enabled
    pub(crate) fn run_finder<H: Host + ?Sized>(&self, host: &H, pipeline: &Pipeline) -> Selection {
        if self.fast_ui {
            with_fast_ui(host, || executor::run(host, pipeline))
        } else {
            executor::run(host, pipeline)
        }
    }
}

/// What a command did to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The host moved into this directory
    ChangedDirectory(PathBuf),
    /// The host selected this file
    SelectedFile(PathBuf),
    /// An editor was launched
    OpenedEditor(EditorInvocation),
    /// Nothing was chosen, or the host could not act on the choice
    NoSelection,
    /// A required tool is not installed
    ToolMissing(&'static str),
}

/// Enter `path` on the host
pub(crate) fn enter_directory<H: Host + ?Sized>(host: &H, path: &Path) -> Outcome {
    match host.change_directory(path) {
        Ok(()) => Outcome::ChangedDirectory(path.to_path_buf()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not change directory");
            Outcome::NoSelection
        }
    }
}

/// Select `path` on the host
pub(crate) fn select<H: Host + ?Sized>(host: &H, path: &Path) -> Outcome {
    match host.select_file(path) {
        Ok(()) => Outcome::SelectedFile(path.to_path_buf()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not select file");
            Outcome::NoSelection
        }
    }
}
