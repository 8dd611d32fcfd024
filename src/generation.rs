//! Artifact generation: generator contract, orchestration, and the built-in generators.
//! The orchestrator owns ordering, filtering, and conflict detection; generators stay black boxes.

pub mod artifact;
pub mod factory;
pub mod metadata;
pub mod orchestrator;
pub mod samples;
pub mod static_files;

pub use artifact::{
    normalize_output_path, ArtifactGenerator, ArtifactKind, ArtifactMap, ArtifactSelection,
    GeneratedContent, BINARY_PLACEHOLDER,
};
pub use factory::{import_policy_for, metadata_namer_for, GeneratorFactory};
pub use metadata::{JavaSampleMetadataNamer, PythonSampleMetadataNamer, SampleMetadataNamer};
pub use orchestrator::{GenerationOrchestrator, GenerationReport, GeneratorContribution};
pub use samples::{SampleImportGenerator, SampleManifestGenerator};
pub use static_files::StaticFileGenerator;
