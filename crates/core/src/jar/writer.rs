use super::PackagingError;
use super::manifest::{MANIFEST_NAME, Manifest};
use super::runtime::{CompilerHome, RuntimeLocator};
use kdrive_api::{FileKind, FqName, OutputFile};
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const DEFAULT_CREATED_BY: &str = concat!("kdrive ", env!("CARGO_PKG_VERSION"));

type RuntimeArchive = ZipArchive<BufReader<File>>;

/// Packages compiled outputs into a jar.
pub struct JarWriter {
    created_by: String,
    compression: CompressionMethod,
    runtime: Box<dyn RuntimeLocator>,
}

impl JarWriter {
    pub fn new() -> Self {
        Self {
            created_by: DEFAULT_CREATED_BY.to_string(),
            compression: CompressionMethod::Deflated,
            runtime: Box::new(CompilerHome::detect()),
        }
    }

    /// Value of the manifest `Created-By` header.
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_runtime_locator(mut self, locator: Box<dyn RuntimeLocator>) -> Self {
        self.runtime = locator;
        self
    }

    /// Write `outputs` to a new jar at `destination`.
    ///
    /// The manifest is the first entry, followed by the outputs in the given
    /// order. With `include_runtime`, every `.class` entry of the runtime
    /// library is appended as-is. The runtime is opened before the
    /// destination is touched, so a missing or unreadable runtime leaves no
    /// jar behind. Later failures leave the destination as written so far
    /// and it must be treated as invalid.
    pub fn write(
        &self,
        destination: &Path,
        include_runtime: bool,
        main_class: Option<&FqName>,
        outputs: &[OutputFile],
    ) -> Result<(), PackagingError> {
        let mut runtime = if include_runtime {
            Some(self.open_runtime()?)
        } else {
            None
        };

        let invalid = |source| PackagingError::InvalidDestination {
            path: destination.to_path_buf(),
            source,
        };
        let file = File::create(destination).map_err(invalid)?;
        let mut jar = ZipWriter::new(BufWriter::new(file));
        let options = self.entry_options();

        let manifest = Manifest::new(&self.created_by).with_main_class(main_class);
        jar.start_file(MANIFEST_NAME, options)?;
        jar.write_all(&manifest.to_bytes())?;

        for output in outputs {
            jar.start_file(output.relative_path.as_str(), options)?;
            jar.write_all(&output.bytes)?;
        }

        if let Some(runtime) = runtime.as_mut() {
            copy_runtime_classes(runtime, &mut jar)?;
        }

        let mut out = jar.finish()?;
        out.flush()?;

        info!("Wrote {} output(s) to {:?}", outputs.len(), destination);
        Ok(())
    }

    fn entry_options(&self) -> SimpleFileOptions {
        // A fixed timestamp keeps repeated builds byte-identical.
        SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(zip::DateTime::default())
    }

    fn open_runtime(&self) -> Result<RuntimeArchive, PackagingError> {
        let runtime_path = match self.runtime.locate() {
            Some(path) if path.is_file() => path,
            other => return Err(PackagingError::RuntimeNotFound { path: other }),
        };
        debug!("Merging runtime classes from {:?}", runtime_path);
        Ok(ZipArchive::new(BufReader::new(File::open(&runtime_path)?))?)
    }
}

impl Default for JarWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_runtime_classes<W: Write + Seek>(
    runtime: &mut RuntimeArchive,
    jar: &mut ZipWriter<W>,
) -> Result<(), PackagingError> {
    let mut copied = 0usize;
    for i in 0..runtime.len() {
        let entry = runtime.by_index_raw(i)?;
        if FileKind::from_entry_name(entry.name()) != FileKind::Class {
            continue;
        }
        jar.raw_copy_file(entry)?;
        copied += 1;
    }

    debug!("Copied {} of {} runtime entries", copied, runtime.len());
    Ok(())
}
