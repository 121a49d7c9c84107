//! Content search producer

use super::Stage;
use crate::exclusions::ExclusionSet;

/// Content search tool
pub const RG: &str = "rg";

/// Pattern used when the user gives none (matches every line)
pub const DEFAULT_PATTERN: &str = ".";

/// Build the ripgrep stage emitting `path:line:column:text` records
///
/// Symlinks are never followed and color is off so the filter sees plain
/// text. A blank pattern becomes [`DEFAULT_PATTERN`].
#[must_use]
pub fn grep_stage(pattern: &str, exclusions: &ExclusionSet) -> Stage {
    let pattern = if pattern.trim().is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };

    Stage::new(RG)
        .args(["--vimgrep", "--hidden", "--no-follow", "--color", "never"])
        .args(exclusions.rg_glob_args())
        .arg("--")
        .arg(pattern)
}
