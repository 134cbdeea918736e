//! Loading build module descriptions.
//!
//! The definition file format is picked from the file extension. Missing
//! files and unknown formats are reported to the sink and produce an empty
//! descriptor set, so callers always get a usable value back.

pub mod model;
pub mod xml;

pub use model::{ModuleDescriptor, ModuleDescriptorSet};

use kdrive_api::DiagnosticSink;
use std::path::Path;
use tracing::debug;

/// Module definition formats understood by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Xml,
}

impl DescriptorFormat {
    /// Classify `path` by extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("xml") {
            Some(Self::Xml)
        } else {
            None
        }
    }

    fn parse(&self, path: &Path, sink: &dyn DiagnosticSink) -> ModuleDescriptorSet {
        match self {
            Self::Xml => xml::parse_module_file(path, sink),
        }
    }
}

pub fn load_module_descriptions(
    path: impl AsRef<Path>,
    sink: &dyn DiagnosticSink,
) -> ModuleDescriptorSet {
    let path = path.as_ref();
    if !path.exists() {
        sink.error(&format!(
            "Module definition file does not exist: {}",
            path.display()
        ));
        return ModuleDescriptorSet::EMPTY;
    }

    match DescriptorFormat::from_path(path) {
        Some(format) => {
            debug!("Loading {:?} module definitions from {:?}", format, path);
            format.parse(path, sink)
        }
        None => {
            sink.error(&format!(
                "Unknown module definition type: {}",
                path.display()
            ));
            ModuleDescriptorSet::EMPTY
        }
    }
}
