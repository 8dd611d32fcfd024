//! CLI route: single route table and run context. Dispatches to the orchestrator and presentation.

use crate::config::{ConfigLoader, GenerationSettings, SamplegenConfig};
use crate::diagnostics::DiagnosticSource;
use crate::error::GenerationError;
use crate::generation::GeneratorFactory;
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_generation_json, format_generation_text, format_validation_text,
};

/// Runtime context for CLI execution: workspace and the loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: SamplegenConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GenerationError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &SamplegenConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, GenerationError> {
        match command {
            Commands::Generate {
                product,
                artifacts,
                snippets,
                out,
                format,
            } => self.handle_generate(product, artifacts, snippets, out.as_deref(), format),
            Commands::ValidateConfig => {
                let result = self.config.validate();
                let text = format_validation_text(&self.config, &result);
                match result {
                    Ok(()) => Ok(text),
                    Err(_) => Err(GenerationError::ConfigError(text)),
                }
            }
        }
    }

    fn handle_generate(
        &self,
        product_path: &Path,
        artifacts: &[String],
        snippets: &[String],
        out: Option<&Path>,
        format: &str,
    ) -> Result<String, GenerationError> {
        if format != "text" && format != "json" {
            return Err(GenerationError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                format
            )));
        }

        // Apply CLI overrides
        let mut config = self.config.clone();
        if !artifacts.is_empty() {
            config.generation.artifacts = artifacts.to_vec();
        }
        if !snippets.is_empty() {
            config.generation.snippets = snippets.to_vec();
        }
        if let Some(dir) = out {
            config.generation.output_dir = Some(dir.to_path_buf());
        }
        let config = config.validated()?;
        let settings = &config.generation;

        // Load product
        let product = self.load_product(product_path, settings)?;
        let selection = settings.artifact_selection()?;

        if !product.diagnostics.is_empty() {
            debug!(
                count = product.diagnostics.diagnostics().len(),
                "Product carries model diagnostics"
            );
        }

        // Run generators
        let started = Instant::now();
        let orchestrator = GeneratorFactory::create(product);
        let diagnostics = &orchestrator.product().diagnostics;
        let report = orchestrator.run_with_report(&selection, diagnostics)?;
        info!(
            files = report.artifacts.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Generation finished"
        );

        // Write files if requested
        if let Some(dir) = &settings.output_dir {
            let dir = self.resolve(dir);
            let written = report.artifacts.write_to(&dir)?;
            info!(dir = %dir.display(), written, "Wrote generated files");
        }

        if format == "json" {
            format_generation_json(&report)
        } else {
            Ok(format_generation_text(&report))
        }
    }

    /// Read the product JSON, filling in the configured language when the product omits it
    /// and applying any frozen timestamp.
    fn load_product(
        &self,
        path: &Path,
        settings: &GenerationSettings,
    ) -> Result<ProductConfig, GenerationError> {
        let path = self.resolve(path);
        debug!(product = %path.display(), "Loading product");
        let raw = std::fs::read_to_string(&path)?;
        let mut value: serde_json::Value = serde_json::from_str(&raw)?;

        if let Some(object) = value.as_object_mut() {
            if !object.contains_key("language") {
                let language = settings.target_language()?;
                object.insert(
                    "language".to_string(),
                    serde_json::Value::String(language.as_str().to_string()),
                );
            }
        }

        let product: ProductConfig = serde_json::from_value(value)?;
        Ok(match settings.frozen_timestamp {
            Some(timestamp) => product.with_generation_timestamp(timestamp),
            None => product,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}
