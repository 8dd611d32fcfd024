//! Configuration System
//!
//! Layered run configuration: merge-policy defaults, the global config file, workspace
//! config files, then `SAMPLEGEN__*` environment overrides. Validation reports every
//! problem at once.

use crate::error::GenerationError;
use crate::generation::ArtifactSelection;
use crate::logging::LoggingConfig;
use crate::policy::TargetLanguage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplegenConfig {
    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which artifacts to generate and how
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Target language used when the product does not pin one
    #[serde(default = "default_language")]
    pub language: String,

    /// Artifact kinds to run, in order
    #[serde(default = "default_artifacts")]
    pub artifacts: Vec<String>,

    /// Only run generators declaring one of these inputs (empty = all)
    #[serde(default)]
    pub snippets: Vec<String>,

    /// Directory generated files are written to (print only if unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Overrides the product's generation timestamp for reproducible output
    #[serde(default)]
    pub frozen_timestamp: Option<DateTime<Utc>>,
}

fn default_language() -> String {
    "java".to_string()
}

fn default_artifacts() -> Vec<String> {
    vec![
        "surface".to_string(),
        "test".to_string(),
        "samples".to_string(),
    ]
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            artifacts: default_artifacts(),
            snippets: Vec::new(),
            output_dir: None,
            frozen_timestamp: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Generation(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl GenerationSettings {
    pub fn target_language(&self) -> Result<TargetLanguage, GenerationError> {
        self.language.parse()
    }

    /// Artifact selection in configured order, scoped to `snippets` when any are set
    pub fn artifact_selection(&self) -> Result<ArtifactSelection, GenerationError> {
        let selection = ArtifactSelection::parse(&self.artifacts)?;
        if self.snippets.is_empty() {
            Ok(selection)
        } else {
            Ok(selection.with_inputs(self.snippets.iter().cloned()))
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(e) = self.target_language() {
            errors.push(e.to_string());
        }
        if self.artifacts.is_empty() {
            errors.push("At least one artifact kind must be enabled".to_string());
        }
        if let Err(e) = ArtifactSelection::parse(&self.artifacts) {
            errors.push(e.to_string());
        }
        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                errors.push("Output directory cannot be empty".to_string());
            }
        }
        errors
    }
}

impl SamplegenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = self
            .generation
            .validate()
            .into_iter()
            .map(ValidationError::Generation)
            .collect();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one configuration error
    pub fn validated(self) -> Result<Self, GenerationError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            GenerationError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
