//! Configuration module for fzjump
//!
//! Configuration is read from the user's config directory
//! (`~/.config/fzjump/config.toml` on Linux). A missing file means
//! defaults; nothing is ever written back.
//!
//! ```toml
//! excludes = [".git", "node_modules", "target"]
//! filter_program = "fzf"
//! fast_ui = true
//!
//! [filter]
//! height = "60%"
//! border = false
//!
//! [editor]
//! fallback = "hx"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::commands::DEFAULT_FILTER_PROGRAM;
use crate::editor::DEFAULT_EDITOR;
use crate::exclusions::{DEFAULT_EXCLUDES, ExclusionSet};
use crate::pipeline::FilterOptions;

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor used when neither `VISUAL` nor `EDITOR` is set
    pub fallback: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_EDITOR.to_string(),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FzjumpConfig {
    /// Path fragments skipped by every finder and by grep
    pub excludes: Vec<String>,

    /// Interactive filter executable
    pub filter_program: String,

    /// Lighten the host UI while finders run
    pub fast_ui: bool,

    /// Interactive filter flags
    pub filter: FilterOptions,

    /// Editor settings
    pub editor: EditorConfig,
}

impl Default for FzjumpConfig {
    fn default() -> Self {
        Self {
            excludes: DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect(),
            filter_program: DEFAULT_FILTER_PROGRAM.to_string(),
            fast_ui: true,
            filter: FilterOptions::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl FzjumpConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("fzjump").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// The shared exclusion set
    #[must_use]
    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::new(self.excludes.iter().cloned())
    }
}
