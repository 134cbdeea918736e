use super::registry::{CanonicalFile, ProcessedFiles};
use kdrive_api::{DiagnosticSink, FileKind, SourceUnit};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// A caller-supplied source location: a single file, a directory tree, or
/// nothing at all. Absent and empty roots are skipped without a report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceRoot(Option<PathBuf>);

impl SourceRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            Self(None)
        } else {
            Self(Some(path))
        }
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn path(&self) -> Option<&Path> {
        self.0.as_deref()
    }
}

impl From<&str> for SourceRoot {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SourceRoot {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for SourceRoot {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<&Path> for SourceRoot {
    fn from(value: &Path) -> Self {
        Self::new(value)
    }
}

impl From<PathBuf> for SourceRoot {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

impl From<&PathBuf> for SourceRoot {
    fn from(value: &PathBuf) -> Self {
        Self::new(value)
    }
}

impl<T: Into<PathBuf>> From<Option<T>> for SourceRoot {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::absent, Self::new)
    }
}

/// Walks source roots and materializes every source file beneath them.
///
/// A file reachable from several roots (or through several symlinks) is
/// materialized once, at its first sighting. Problems with a root are
/// reported to the sink and the walk moves on to the next root.
pub struct SourceDiscovery<'a> {
    sink: &'a dyn DiagnosticSink,
    expected_kind: FileKind,
    processed: ProcessedFiles,
    units: Vec<SourceUnit>,
}

impl<'a> SourceDiscovery<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            sink,
            expected_kind: FileKind::Kotlin,
            processed: ProcessedFiles::new(),
            units: Vec::new(),
        }
    }

    pub fn with_expected_kind(mut self, kind: FileKind) -> Self {
        self.expected_kind = kind;
        self
    }

    pub fn add_root(&mut self, root: impl Into<SourceRoot>) {
        let root = root.into();
        let Some(root_path) = root.path() else {
            return;
        };

        let Some(resolved) = CanonicalFile::resolve(root_path) else {
            self.sink.error(&format!(
                "Source file or directory not found: {}",
                root_path.display()
            ));
            return;
        };

        if !resolved.is_dir() && FileKind::from_path(resolved.path()) != self.expected_kind {
            self.sink.error(&format!(
                "Source entry is not a {} file: {}",
                self.expected_kind_label(),
                root_path.display()
            ));
            return;
        }

        let before = self.units.len();
        for entry in WalkDir::new(root_path)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry under {:?}: {}", root_path, e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            self.visit_file(entry.path());
        }

        debug!(
            "Root {:?} contributed {} source unit(s)",
            root_path,
            self.units.len() - before
        );
    }

    fn visit_file(&mut self, path: &Path) {
        let Some(file) = CanonicalFile::resolve(path) else {
            return;
        };
        if !self.processed.register(&file) {
            return;
        }
        if let Some(unit) = self.materialize(file) {
            self.units.push(unit);
        }
    }

    fn materialize(&self, file: CanonicalFile) -> Option<SourceUnit> {
        let kind = FileKind::from_path(file.path());
        if kind != self.expected_kind {
            return None;
        }
        // Undecodable content is not a source file.
        let text = std::fs::read_to_string(file.path()).ok()?;
        Some(SourceUnit::new(file.into_path_buf(), kind, text))
    }

    fn expected_kind_label(&self) -> &'static str {
        match self.expected_kind {
            FileKind::Kotlin => "Kotlin",
            FileKind::Java => "Java",
            FileKind::Class => "class",
            FileKind::Xml => "XML",
            FileKind::Other => "source",
        }
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn finish(self) -> Vec<SourceUnit> {
        info!(
            "Source discovery complete: {} unit(s) from {} file(s)",
            self.units.len(),
            self.processed.len()
        );
        self.units
    }
}

/// Collect the Kotlin source units reachable from `roots`, in first-seen order.
pub fn discover_sources<I>(roots: I, sink: &dyn DiagnosticSink) -> Vec<SourceUnit>
where
    I: IntoIterator,
    I::Item: Into<SourceRoot>,
{
    let mut discovery = SourceDiscovery::new(sink);
    for root in roots {
        discovery.add_root(root);
    }
    discovery.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_roots() {
        assert_eq!(SourceRoot::from("").path(), None);
        assert_eq!(SourceRoot::from(None::<PathBuf>).path(), None);
        let root = SourceRoot::from(Some("src"));
        assert_eq!(root.path(), Some(Path::new("src")));
    }
}
