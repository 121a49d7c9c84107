//! Host error types

use thiserror::Error;

/// Errors a host can report back to a command
#[derive(Debug, Error)]
pub enum HostError {
    /// The host could not start a process
    #[error("Failed to spawn '{program}': {source}")]
    SpawnError {
        /// Program (or shell command) that failed to start
        program: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The host does not know the named setting
    #[error("Unsupported setting: {0}")]
    UnsupportedSetting(String),

    /// The host refused a setting value, or its reconfiguration hook failed
    #[error("Setting '{name}' rejected: {reason}")]
    SettingRejected {
        /// Setting name
        name: String,
        /// Host-provided reason
        reason: String,
    },

    /// Navigation target could not be used
    #[error("Cannot navigate to '{0}'")]
    NavigationError(String),

    /// IO error during host operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
