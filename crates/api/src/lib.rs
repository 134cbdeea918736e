pub mod diagnostics;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, Severity, SourceLocation, TracingSink,
};
pub use error::{ApiError, ApiResult};
pub use models::*;
