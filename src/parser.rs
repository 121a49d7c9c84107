//! Interpretation of the line chosen in the interactive filter
//!
//! Two shapes come back: a bare path from the finders, or a
//! `path:line:column:text` record from ripgrep's `--vimgrep` output.
//! Anything else is read as a path up to its first colon, so a malformed
//! record still lands somewhere sensible instead of failing.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static MATCH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?):(\d+):(\d+):").expect("match-line pattern is valid")
});

/// One-based line number, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNumber(u64);

impl LineNumber {
    /// Line 1
    pub const FIRST: Self = Self(1);

    /// Build from a number; zero becomes line 1
    #[must_use]
    pub const fn new(line: u64) -> Self {
        if line == 0 { Self::FIRST } else { Self(line) }
    }

    /// Parse user or tool text; anything that is not a positive decimal
    /// integer becomes line 1
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Self::FIRST;
        }
        text.parse::<u64>().map_or(Self::FIRST, Self::new)
    }

    /// The line as a number
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRecord {
    /// A path with no position
    Path(PathBuf),
    /// A grep hit
    Location {
        /// Absolute file path
        path: PathBuf,
        /// Line of the hit
        line: LineNumber,
        /// Column of the hit; informational, no editor dialect takes it
        column: u64,
    },
}

impl MatchRecord {
    /// The absolute path in either shape
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) | Self::Location { path, .. } => path,
        }
    }

    /// The line, for grep hits
    #[must_use]
    pub const fn line(&self) -> Option<LineNumber> {
        match self {
            Self::Path(_) => None,
            Self::Location { line, .. } => Some(*line),
        }
    }
}

/// Parse `line`, resolving relative paths against the current directory
/// as it is right now
#[must_use]
pub fn parse(line: &str) -> MatchRecord {
    parse_in(&current_dir(), line)
}

/// Resolve a whole finder line to an absolute path, colons included
#[must_use]
pub fn resolve(line: &str) -> PathBuf {
    absolutize(&current_dir(), Path::new(line.trim()))
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "current directory unavailable, leaving path relative");
        PathBuf::new()
    })
}

/// Parse `line`, resolving relative paths against `base`
#[must_use]
pub fn parse_in(base: &Path, line: &str) -> MatchRecord {
    let line = line.trim();

    if let Some(caps) = MATCH_LINE.captures(line) {
        let path = absolutize(base, Path::new(&caps[1]));
        let column = caps[3].parse().unwrap_or_default();
        return MatchRecord::Location {
            path,
            line: LineNumber::parse(&caps[2]),
            column,
        };
    }

    let raw = line.split_once(':').map_or(line, |(head, _)| head);
    MatchRecord::Path(absolutize(base, Path::new(raw)))
}

/// Join `path` onto `base` and fold `.` and `..` lexically, without
/// touching the filesystem
#[must_use]
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
