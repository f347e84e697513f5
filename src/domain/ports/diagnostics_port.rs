use crate::domain::Diagnostic;

/// Channel for user-visible diagnostics.
pub trait DiagnosticsPort: Send + Sync {
    /// Reports a diagnostic. Must not block or fail.
    fn report(&self, diagnostic: Diagnostic);
}
