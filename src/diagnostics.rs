//! Model diagnostics
//!
//! Accumulates errors and warnings raised while resolving the API model. The orchestrator
//! only asks for the error count and the full diagnostic list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Note => write!(f, "NOTE"),
        }
    }
}

/// A single diagnostic with optional source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, location: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity,
            location: location.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}: {}", self.severity, location, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Read-only view over a diagnostic collector.
pub trait DiagnosticSource {
    /// Number of error-severity diagnostics
    fn error_count(&self) -> usize;

    /// Every collected diagnostic, in report order
    fn diagnostics(&self) -> Vec<Diagnostic>;
}

/// In-memory diagnostic collector; serializes as a plain list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagCollector {
    diags: Vec<Diagnostic>,
}

impl DiagCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diags.push(diagnostic);
    }

    pub fn add_error(&mut self, location: Option<&str>, message: impl Into<String>) {
        self.add(Diagnostic::new(Severity::Error, location, message));
    }

    pub fn add_warning(&mut self, location: Option<&str>, message: impl Into<String>) {
        self.add(Diagnostic::new(Severity::Warning, location, message));
    }

    pub fn is_empty(&self) -> bool {
        self.diags.is_empty()
    }
}

impl DiagnosticSource for DiagCollector {
    fn error_count(&self) -> usize {
        self.diags.iter().filter(|d| d.is_error()).count()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diags.clone()
    }
}

/// Render diagnostics one per line
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  - {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}
