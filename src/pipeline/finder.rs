//! Candidate path producers

use super::Stage;
use crate::exclusions::ExclusionSet;
use crate::probe;
use crate::ui::Host;

/// Names the fast traversal tool is installed under (Debian ships `fdfind`)
pub const FD_NAMES: &[&str] = &["fd", "fdfind"];

/// Which kinds of entries a finder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// Files and directories
    #[default]
    Any,
    /// Directories only
    Directories,
}

/// Traversal tool available on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FastFinder {
    /// fd, under the name that resolved
    Fd(String),
    /// POSIX find fallback
    Find,
}

impl FastFinder {
    /// Probe the host for fd, falling back to find
    pub fn detect<H: Host + ?Sized>(host: &H) -> Self {
        probe::first_available(host, FD_NAMES)
            .map_or(Self::Find, |name| Self::Fd(name.to_string()))
    }
}

/// Build the stage listing candidate paths below the working directory
///
/// Both branches skip every excluded fragment and never emit `.` itself.
/// fd does not follow symlinks; find resolves its root with `-L`.
#[must_use]
pub fn finder_stage(finder: &FastFinder, kind: EntryKind, exclusions: &ExclusionSet) -> Stage {
    match finder {
        FastFinder::Fd(program) => {
            let mut stage = Stage::new(program.as_str()).args(["--hidden", "--strip-cwd-prefix"]);
            if kind == EntryKind::Directories {
                stage = stage.args(["--type", "d"]);
            }
            stage.args(exclusions.fd_args())
        }
        FastFinder::Find => {
            let mut stage = Stage::new("find")
                .args(["-L", ".", "-mindepth", "1"])
                .args(exclusions.find_prune_args());
            if kind == EntryKind::Directories {
                stage = stage.args(["-type", "d"]);
            }
            stage.arg("-print")
        }
    }
}
