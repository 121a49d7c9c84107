//! Pipeline construction errors

use thiserror::Error;

/// Errors raised while composing a pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A token cannot be represented in a shell command
    #[error("Cannot quote argument for '{program}': {reason}")]
    Unquotable {
        /// Program whose arguments failed to quote
        program: String,
        /// Quoting failure
        reason: String,
    },
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
