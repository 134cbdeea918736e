use kdrive_api::{DiagnosticCollector, DiagnosticSink, Severity, SourceLocation, TracingSink};
use kdrive_core::error::KdriveError;

/// Prints diagnostics to stderr as they arrive, logs them and remembers them.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    log: TracingSink,
    collected: DiagnosticCollector,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Err` carrying the error count when anything was reported as an error.
    pub fn check(&self) -> Result<(), KdriveError> {
        let errors = self.collected.errors().len();
        if errors > 0 {
            Err(KdriveError::Reported(errors))
        } else {
            Ok(())
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&self, severity: Severity, message: &str, location: Option<&SourceLocation>) {
        match location {
            Some(location) => eprintln!("{}: {}: {}", location, severity, message),
            None => eprintln!("{}: {}", severity, message),
        }
        self.log.report(severity, message, location);
        self.collected.report(severity, message, location);
    }
}
