//! Locating the pre-built runtime library bundled into self-contained jars.
//!
//! Resolution order for [`CompilerHome`]:
//! - an explicitly configured home
//! - the `KOTLIN_HOME` environment variable
//! - the installation the running executable belongs to (`<home>/bin/kdrive`)

use std::path::{Path, PathBuf};
use tracing::debug;

pub const KOTLIN_HOME_ENV: &str = "KOTLIN_HOME";
pub const RUNTIME_JAR: &str = "kotlin-runtime.jar";

/// Finds the runtime archive to merge into an output jar.
pub trait RuntimeLocator {
    fn locate(&self) -> Option<PathBuf>;
}

/// Always answers the same path, whether or not it exists.
#[derive(Debug, Clone)]
pub struct FixedRuntime(PathBuf);

impl FixedRuntime {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl RuntimeLocator for FixedRuntime {
    fn locate(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Resolves the runtime as `<home>/lib/kotlin-runtime.jar`.
#[derive(Debug, Clone, Default)]
pub struct CompilerHome {
    home: Option<PathBuf>,
}

impl CompilerHome {
    /// Detect the home lazily, on each lookup.
    pub fn detect() -> Self {
        Self { home: None }
    }

    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn home(&self) -> Option<PathBuf> {
        if let Some(home) = &self.home {
            return Some(home.clone());
        }
        if let Some(home) = std::env::var_os(KOTLIN_HOME_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(home));
        }
        let exe = std::env::current_exe().ok()?;
        exe.parent()?.parent().map(Path::to_path_buf)
    }

    pub fn runtime_path(&self) -> Option<PathBuf> {
        self.home().map(|home| home.join("lib").join(RUNTIME_JAR))
    }
}

impl RuntimeLocator for CompilerHome {
    fn locate(&self) -> Option<PathBuf> {
        let path = self.runtime_path()?;
        debug!("Runtime library candidate: {:?}", path);
        path.is_file().then_some(path)
    }
}
