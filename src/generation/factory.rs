//! Generator factory: wires the built-in generators for a product's target language.

use crate::generation::artifact::ArtifactKind;
use crate::generation::metadata::{
    JavaSampleMetadataNamer, PythonSampleMetadataNamer, SampleMetadataNamer,
};
use crate::generation::orchestrator::GenerationOrchestrator;
use crate::generation::samples::{SampleImportGenerator, SampleManifestGenerator};
use crate::generation::static_files::StaticFileGenerator;
use crate::policy::{ImportPolicy, JavaImportPolicy, PythonImportPolicy, TargetLanguage};
use crate::product::ProductConfig;
use std::sync::Arc;
use tracing::debug;

pub fn metadata_namer_for(language: TargetLanguage) -> Arc<dyn SampleMetadataNamer> {
    match language {
        TargetLanguage::Java => Arc::new(JavaSampleMetadataNamer),
        TargetLanguage::Python => Arc::new(PythonSampleMetadataNamer),
    }
}

pub fn import_policy_for(product: &ProductConfig) -> Arc<dyn ImportPolicy> {
    match product.language {
        TargetLanguage::Java => match &product.client_package {
            Some(package) => Arc::new(JavaImportPolicy::with_package(package.clone())),
            None => Arc::new(JavaImportPolicy::new()),
        },
        TargetLanguage::Python => {
            let namer = PythonSampleMetadataNamer;
            Arc::new(PythonImportPolicy::new(namer.versioned_namespace(product)))
        }
    }
}

pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Orchestrator with the built-in generators registered:
    /// packaging files under `surface`, import sections then manifest under `samples`.
    pub fn create(product: ProductConfig) -> GenerationOrchestrator {
        let namer = metadata_namer_for(product.language);
        let policy = import_policy_for(&product);

        let packaging = StaticFileGenerator::packaging(&product);
        let imports = SampleImportGenerator::new(&product, policy, namer.clone());
        let manifest = SampleManifestGenerator::new(&product, namer);

        debug!(language = %product.language, "Creating built-in generators");
        let mut orchestrator = GenerationOrchestrator::new(product);
        if let Some(packaging) = packaging {
            orchestrator.register(ArtifactKind::Surface, Box::new(packaging));
        }
        orchestrator.register(ArtifactKind::Samples, Box::new(imports));
        orchestrator.register(ArtifactKind::Samples, Box::new(manifest));
        orchestrator
    }
}
