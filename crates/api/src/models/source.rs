use super::kind::FileKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One discovered source file, loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Canonical path of the file on disk.
    pub path: PathBuf,
    pub kind: FileKind,
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: PathBuf, kind: FileKind, text: String) -> Self {
        Self { path, kind, text }
    }

    pub fn file_name(&self) -> &str {
        let name = self.path.file_name().and_then(|n| n.to_str());
        name.unwrap_or("")
    }
}

/// A compiled artifact destined for the output archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Archive path using `/` separators, e.g. `pkg/MainKt.class`.
    pub relative_path: String,
    pub bytes: Vec<u8>,
}

impl OutputFile {
    pub fn new(relative_path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            relative_path: relative_path.into(),
            bytes: bytes.into(),
        }
    }
}
