//! Error types for sample import collection and artifact orchestration.

use crate::diagnostics::{render_diagnostics, Diagnostic};
use thiserror::Error;

/// Contract violations raised while building or walking output views.
///
/// These indicate a bug in whatever produced the view tree and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Invalid type reference: identity cannot be empty")]
    EmptyTypeIdentity,

    #[error("Invalid type reference: malformed identity '{0}'")]
    MalformedTypeIdentity(String),

    #[error("Collection type reference requires an element type")]
    MissingElementType,

    #[error("Collection identity '{0}' is the same as its element's identity")]
    CollectionShadowsElement(String),

    #[error("Element type given for non-collection type '{0}'")]
    UnexpectedElementType(String),

    #[error("Loop view '{variable}' iterates non-collection type '{identity}'")]
    NotACollection { variable: String, identity: String },
}

/// Orchestration errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Model has {error_count} unresolved error(s):\n{}", render_diagnostics(.diagnostics))]
    UnresolvedDiagnostics {
        error_count: usize,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("File conflict: '{path}' produced by both '{first}' and '{second}'")]
    FileConflict {
        path: String,
        first: String,
        second: String,
    },

    #[error("Generator '{generator}' failed: {source}")]
    GeneratorFailed {
        generator: String,
        #[source]
        source: Box<GenerationError>,
    },

    #[error("Unknown artifact kind: {0} (expected 'surface', 'test' or 'samples')")]
    UnknownArtifact(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),

    #[error("Output view error: {0}")]
    View(#[from] ViewError),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for GenerationError {
    fn from(err: config::ConfigError) -> Self {
        GenerationError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for GenerationError {
    fn from(err: toml::ser::Error) -> Self {
        GenerationError::Serialization(err.to_string())
    }
}
