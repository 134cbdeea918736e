//! Jar packaging of compiled outputs.

pub mod manifest;
pub mod output;
pub mod runtime;
pub mod writer;

pub use manifest::Manifest;
pub use output::collect_output_files;
pub use runtime::{CompilerHome, FixedRuntime, RuntimeLocator};
pub use writer::JarWriter;

use kdrive_api::{FqName, OutputFile};
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::result::ZipError;

#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("Invalid jar path {}", .path.display())]
    InvalidDestination {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't find runtime library{}", describe_candidate(.path))]
    RuntimeNotFound { path: Option<PathBuf> },
    #[error("Failed to generate jar file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to generate jar file: {0}")]
    Zip(#[from] ZipError),
}

fn describe_candidate(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Write `outputs` to `destination` with the default [`JarWriter`].
pub fn write_to_jar(
    destination: &Path,
    include_runtime: bool,
    main_class: Option<&FqName>,
    outputs: &[OutputFile],
) -> Result<(), PackagingError> {
    JarWriter::new().write(destination, include_runtime, main_class, outputs)
}
