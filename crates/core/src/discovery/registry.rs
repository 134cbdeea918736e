//! Identity tracking for files visited during one discovery pass.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolved identity of a concrete file.
///
/// Two handles compare equal iff they name the same file after symlinks,
/// `.` and `..` components are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalFile(PathBuf);

impl CanonicalFile {
    /// Resolve `path` against the filesystem. `None` when it does not exist
    /// or cannot be resolved.
    pub fn resolve(path: &Path) -> Option<Self> {
        std::fs::canonicalize(path).ok().map(Self)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn is_dir(&self) -> bool {
        self.0.is_dir()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Files already handed to the materializer.
#[derive(Debug, Default)]
pub struct ProcessedFiles {
    seen: HashSet<CanonicalFile>,
}

impl ProcessedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `file`. Returns `false` if it was already recorded.
    pub fn register(&mut self, file: &CanonicalFile) -> bool {
        if self.seen.contains(file) {
            return false;
        }
        self.seen.insert(file.clone())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
