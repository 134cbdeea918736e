//! Diagnostic reporting channel shared by the driver components.
//!
//! Components never print. They hand every message to a caller-supplied
//! [`DiagnosticSink`] and keep going; the caller decides whether a reported
//! error aborts the build.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Logging,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Logging => "logging",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position inside a source file. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}: {}", location, self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Receiver for diagnostics produced while discovering sources or loading
/// module descriptions.
pub trait DiagnosticSink {
    fn report(&self, severity: Severity, message: &str, location: Option<&SourceLocation>);

    fn error(&self, message: &str) {
        self.report(Severity::Error, message, None);
    }
}

/// Records every report in arrival order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|d| d.severity.is_error())
            .cloned()
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.lock().iter().any(|d| d.severity.is_error())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, severity: Severity, message: &str, location: Option<&SourceLocation>) {
        self.lock().push(Diagnostic {
            severity,
            message: message.to_string(),
            location: location.cloned(),
        });
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, severity: Severity, message: &str, location: Option<&SourceLocation>) {
        let location = location.map(|l| l.to_string()).unwrap_or_default();
        match severity {
            Severity::Error => tracing::error!(%location, "{}", message),
            Severity::Warning => tracing::warn!(%location, "{}", message),
            Severity::Info => tracing::info!(%location, "{}", message),
            Severity::Logging => tracing::debug!(%location, "{}", message),
        }
    }
}
