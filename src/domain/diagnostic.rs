//! User-facing diagnostics raised while building a page.

use std::fmt;

/// Severity of a user-facing diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Hint or follow-up advice.
    Info,
    /// Something is missing but the page is still usable.
    Warn,
    /// An operation failed.
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Non-blocking message shown to the person viewing the directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub level: DiagnosticLevel,
    /// Short heading naming the area that raised it.
    pub title: String,
    /// Explanation shown under the heading.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit level.
    #[must_use]
    pub fn new(level: DiagnosticLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates a [`DiagnosticLevel::Info`] diagnostic.
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, title, message)
    }

    /// Creates a [`DiagnosticLevel::Warn`] diagnostic.
    #[must_use]
    pub fn warn(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warn, title, message)
    }

    /// Creates a [`DiagnosticLevel::Error`] diagnostic.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, title, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let d = Diagnostic::error("Image", "HTTP 404");
        assert_eq!(d.level, DiagnosticLevel::Error);
        assert_eq!(d.title, "Image");
        assert_eq!(d.message, "HTTP 404");
        assert_eq!(d.to_string(), "Image: HTTP 404");
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&DiagnosticLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
    }
}
