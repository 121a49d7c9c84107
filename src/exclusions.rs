//! Shared path exclusions
//!
//! One [`ExclusionSet`] is built from configuration at startup and handed to
//! every stage builder, so file search, directory search and content search
//! all skip the same build artifacts, caches and version-control metadata.

use std::path::Path;
use std::sync::Arc;

/// Fragments excluded when nothing is configured
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    "node_modules",
    ".venv",
    "venv",
    "dist",
    "build",
    "target",
    ".cache",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
];

/// Ordered, immutable list of path fragments omitted from every traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    fragments: Arc<[String]>,
}

impl ExclusionSet {
    /// Build a set from fragments, dropping blanks and duplicates while
    /// keeping first-seen order
    #[must_use]
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        for fragment in fragments {
            let fragment = fragment.into();
            let fragment = fragment.trim().trim_matches('/').to_string();
            if !fragment.is_empty() && !kept.contains(&fragment) {
                kept.push(fragment);
            }
        }
        Self {
            fragments: kept.into(),
        }
    }

    /// A set that excludes nothing
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Iterate over the fragments in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    /// Number of fragments
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the set excludes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether any segment of `path` equals an excluded fragment
    #[must_use]
    pub fn excludes_path(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let segment = component.as_os_str().to_string_lossy();
            self.fragments.iter().any(|f| *f == segment)
        })
    }

    /// `--exclude <fragment>` pairs for fd
    #[must_use]
    pub fn fd_args(&self) -> Vec<String> {
        self.iter()
            .flat_map(|f| ["--exclude".to_string(), f.to_string()])
            .collect()
    }

    /// `-path '*/<fragment>' -prune -o` chain for POSIX find
    ///
    /// Empty when the set is empty, so the caller's expression stands alone.
    #[must_use]
    pub fn find_prune_args(&self) -> Vec<String> {
        self.iter()
            .flat_map(|f| {
                [
                    "-path".to_string(),
                    format!("*/{f}"),
                    "-prune".to_string(),
                    "-o".to_string(),
                ]
            })
            .collect()
    }

    /// `--glob !<fragment>` pairs for ripgrep
    #[must_use]
    pub fn rg_glob_args(&self) -> Vec<String> {
        self.iter()
            .flat_map(|f| ["--glob".to_string(), format!("!{f}")])
            .collect()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_contents() {
        let set = ExclusionSet::default();
        assert_eq!(set.len(), DEFAULT_EXCLUDES.len());
        assert_eq!(set.iter().next(), Some(".git"));
    }

    #[test]
    fn test_new_drops_blanks_and_duplicates() {
        let set = ExclusionSet::new(["target", "", "target/", "  ", "node_modules"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["target", "node_modules"]);
    }

    #[test]
    fn test_excludes_path_matches_whole_segments() {
        let set = ExclusionSet::new(["target", ".git"]);
        assert!(set.excludes_path(Path::new("target/debug/app")));
        assert!(set.excludes_path(Path::new("crates/core/target")));
        assert!(set.excludes_path(Path::new("./.git/HEAD")));
        assert!(!set.excludes_path(Path::new("src/targeted.rs")));
        assert!(!set.excludes_path(Path::new(".github/workflows")));
    }

    #[test]
    fn test_fd_args() {
        let set = ExclusionSet::new([".git", "target"]);
        assert_eq!(
            set.fd_args(),
            vec!["--exclude", ".git", "--exclude", "target"]
        );
    }

    #[test]
    fn test_find_prune_args() {
        let set = ExclusionSet::new([".git"]);
        assert_eq!(set.find_prune_args(), vec!["-path", "*/.git", "-prune", "-o"]);
        assert!(ExclusionSet::empty().find_prune_args().is_empty());
    }

    #[test]
    fn test_rg_glob_args() {
        let set = ExclusionSet::new(["node_modules"]);
        assert_eq!(set.rg_glob_args(), vec!["--glob", "!node_modules"]);
    }

    #[test]
    fn test_clones_share_storage() {
        let set = ExclusionSet::default();
        let clone = set.clone();
        assert!(Arc::ptr_eq(&set.fragments, &clone.fragments));
    }
}
