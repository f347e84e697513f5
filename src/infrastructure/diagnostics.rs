//! Diagnostics adapters.

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::domain::ports::DiagnosticsPort;
use crate::domain::{Diagnostic, DiagnosticLevel};

/// Writes diagnostics to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticsPort for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log_diagnostic(&diagnostic);
    }
}

/// Collects diagnostics raised during one render pass.
///
/// Every diagnostic is also written to the log.
#[derive(Debug, Default)]
pub struct BufferedDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl BufferedDiagnostics {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing has been reported since the last drain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Takes the collected diagnostics in the order they were reported.
    #[must_use]
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticsPort for BufferedDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        log_diagnostic(&diagnostic);
        self.entries.lock().push(diagnostic);
    }
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    let Diagnostic { level, title, message } = diagnostic;
    match level {
        DiagnosticLevel::Info => info!(title = %title, "{message}"),
        DiagnosticLevel::Warn => warn!(title = %title, "{message}"),
        DiagnosticLevel::Error => error!(title = %title, "{message}"),
    }
}
