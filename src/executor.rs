//! Pipeline execution

use crate::pipeline::Pipeline;
use crate::ui::Host;

/// What came back from the interactive filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked this line
    Chosen(String),
    /// Aborted, failed, or nothing to pick
    Nothing,
}

impl Selection {
    /// The chosen line, if any
    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        match self {
            Self::Chosen(line) => Some(line),
            Self::Nothing => None,
        }
    }
}

/// Run `pipeline` on the host and interpret the result
///
/// A non-zero exit (the user aborted the filter or the producer failed),
/// empty output, or a host that cannot run the pipeline all mean
/// [`Selection::Nothing`]. Stderr of the pipeline is never shown.
pub fn run<H: Host + ?Sized>(host: &H, pipeline: &Pipeline) -> Selection {
    let command = match pipeline.to_shell() {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(error = %e, "could not compose pipeline");
            return Selection::Nothing;
        }
    };

    tracing::debug!(%command, "running pipeline");
    let result = match host.execute(&command) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "pipeline failed to run");
            return Selection::Nothing;
        }
    };
    tracing::debug!(
        exit_code = result.exit_code,
        bytes = result.stdout.len(),
        "pipeline finished"
    );

    if !result.success() || result.stdout.is_empty() {
        return Selection::Nothing;
    }
    Selection::Chosen(result.stdout)
}
