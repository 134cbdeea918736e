pub mod error;
pub mod logging;

pub mod discovery;
pub mod jar;
pub mod modules;

pub use discovery::{SourceRoot, discover_sources};
pub use error::Result;
pub use jar::{JarWriter, PackagingError, write_to_jar};
pub use modules::{ModuleDescriptor, ModuleDescriptorSet, load_module_descriptions};
