//! Generation orchestrator: runs selected artifact generators in caller order against one
//! product configuration and merges their files into a single namespace.
//!
//! Fail-fast throughout: unresolved model errors abort before any generator runs, and the
//! first path collision or generator error aborts the run with no partial result.

use crate::diagnostics::DiagnosticSource;
use crate::error::GenerationError;
use crate::generation::artifact::{
    normalize_output_path, ArtifactGenerator, ArtifactKind, ArtifactMap, ArtifactSelection,
};
use crate::product::ProductConfig;
use std::collections::BTreeMap;
use tracing::{debug, error, info};

struct Registration {
    kind: ArtifactKind,
    generator: Box<dyn ArtifactGenerator>,
}

/// Files contributed by one generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorContribution {
    pub generator: String,
    pub kind: ArtifactKind,
    pub paths: Vec<String>,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub artifacts: ArtifactMap,
    pub contributions: Vec<GeneratorContribution>,
    /// Generators filtered out by the input allow-list
    pub skipped: Vec<String>,
}

pub struct GenerationOrchestrator {
    product: ProductConfig,
    registrations: Vec<Registration>,
}

impl GenerationOrchestrator {
    pub fn new(product: ProductConfig) -> Self {
        Self {
            product,
            registrations: Vec::new(),
        }
    }

    /// Register a generator for `kind`. Within a kind, generators run in registration order.
    pub fn register(&mut self, kind: ArtifactKind, generator: Box<dyn ArtifactGenerator>) {
        debug!(kind = %kind, generator = generator.name(), "Registered artifact generator");
        self.registrations.push(Registration { kind, generator });
    }

    pub fn with_generator(
        mut self,
        kind: ArtifactKind,
        generator: impl ArtifactGenerator + 'static,
    ) -> Self {
        self.register(kind, Box::new(generator));
        self
    }

    pub fn product(&self) -> &ProductConfig {
        &self.product
    }

    /// Names of generators registered for `kind`, in run order
    pub fn generator_names(&self, kind: ArtifactKind) -> Vec<&str> {
        self.registrations
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.generator.name())
            .collect()
    }

    /// Run the selected artifacts and return the merged path -> content map.
    pub fn run_artifacts(
        &self,
        selection: &ArtifactSelection,
        diagnostics: &dyn DiagnosticSource,
    ) -> Result<ArtifactMap, GenerationError> {
        self.run_with_report(selection, diagnostics)
            .map(|report| report.artifacts)
    }

    /// Like [`run_artifacts`](Self::run_artifacts), also reporting who produced what.
    pub fn run_with_report(
        &self,
        selection: &ArtifactSelection,
        diagnostics: &dyn DiagnosticSource,
    ) -> Result<GenerationReport, GenerationError> {
        let error_count = diagnostics.error_count();
        if error_count > 0 {
            let diagnostics = diagnostics.diagnostics();
            for diag in &diagnostics {
                error!(diagnostic = %diag, "Unresolved model diagnostic");
            }
            return Err(GenerationError::UnresolvedDiagnostics {
                error_count,
                diagnostics,
            });
        }

        info!(
            package = self.product.package_name.as_str(),
            language = %self.product.language,
            artifacts = ?selection.kinds(),
            "Starting artifact generation"
        );

        let mut report = GenerationReport::default();
        let mut owners: BTreeMap<String, String> = BTreeMap::new();

        for registration in self.resolve(selection) {
            let name = registration.generator.name();

            if !selection.admits(&registration.generator.input_names()) {
                debug!(generator = name, "Skipping generator with no selected inputs");
                report.skipped.push(name.to_string());
                continue;
            }

            debug!(generator = name, kind = %registration.kind, "Running generator");
            let output = registration
                .generator
                .generate(&self.product)
                .map_err(|source| {
                    error!(generator = name, error = %source, "Generator failed");
                    GenerationError::GeneratorFailed {
                        generator: name.to_string(),
                        source: Box::new(source),
                    }
                })?;

            let mut paths = Vec::with_capacity(output.len());
            for (raw_path, content) in output {
                let path = normalize_output_path(&raw_path)?;
                if let Some(first) = owners.get(&path) {
                    error!(path = path.as_str(), first = first.as_str(), second = name, "File conflict");
                    return Err(GenerationError::FileConflict {
                        path,
                        first: first.clone(),
                        second: name.to_string(),
                    });
                }
                owners.insert(path.clone(), name.to_string());
                report.artifacts.insert(path.clone(), content);
                paths.push(path);
            }

            debug!(generator = name, files = paths.len(), "Generator finished");
            report.contributions.push(GeneratorContribution {
                generator: name.to_string(),
                kind: registration.kind,
                paths,
            });
        }

        info!(
            files = report.artifacts.len(),
            generators = report.contributions.len(),
            skipped = report.skipped.len(),
            "Artifact generation completed"
        );
        Ok(report)
    }

    /// Registrations for the selected kinds: caller's kind order, then registration order.
    fn resolve<'a>(&'a self, selection: &ArtifactSelection) -> Vec<&'a Registration> {
        selection
            .kinds()
            .iter()
            .flat_map(|kind| self.registrations.iter().filter(move |r| r.kind == *kind))
            .collect()
    }
}
