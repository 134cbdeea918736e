use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// File kinds the driver distinguishes when walking sources and archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Kotlin,
    Java,
    Class,
    Xml,
    Other,
}

impl FileKind {
    /// Map a file extension to a kind. Matching ignores ASCII case.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "kt" => Self::Kotlin,
            "java" => Self::Java,
            "class" => Self::Class,
            "xml" => Self::Xml,
            _ => Self::Other,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Other, Self::from_extension)
    }

    /// Kind of an archive entry name such as `kotlin/Unit.class`.
    pub fn from_entry_name(name: &str) -> Self {
        let file_name = name.rsplit('/').next().unwrap_or(name);
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => Self::from_extension(&file_name[idx + 1..]),
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kotlin => "kotlin",
            Self::Java => "java",
            Self::Class => "class",
            Self::Xml => "xml",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileKind::from_extension("KT"), FileKind::Kotlin);
        assert_eq!(FileKind::from_extension("Class"), FileKind::Class);
        assert_eq!(FileKind::from_extension("kts"), FileKind::Other);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileKind::from_path(Path::new("src/a.kt")), FileKind::Kotlin);
        assert_eq!(
            FileKind::from_path(Path::new("src/Makefile")),
            FileKind::Other
        );
        assert_eq!(FileKind::from_path(Path::new("modules.XML")), FileKind::Xml);
    }

    #[test]
    fn test_from_entry_name() {
        assert_eq!(
            FileKind::from_entry_name("kotlin/jvm/internal/Intrinsics.class"),
            FileKind::Class
        );
        assert_eq!(
            FileKind::from_entry_name("META-INF/MANIFEST.MF"),
            FileKind::Other
        );
        assert_eq!(FileKind::from_entry_name("kotlin/"), FileKind::Other);
        assert_eq!(FileKind::from_entry_name(".class"), FileKind::Other);
    }
}
