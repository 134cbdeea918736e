//! Source discovery: turns caller-supplied roots into in-memory source units.

pub mod registry;
pub mod walker;

pub use registry::{CanonicalFile, ProcessedFiles};
pub use walker::{SourceDiscovery, SourceRoot, discover_sources};
