//! Integration tests for multi-generator orchestration

use samplegen::diagnostics::{DiagCollector, Severity};
use samplegen::error::GenerationError;
use samplegen::generation::{
    ArtifactGenerator, ArtifactKind, ArtifactMap, ArtifactSelection, GenerationOrchestrator,
    GeneratorFactory, StaticFileGenerator, BINARY_PLACEHOLDER,
};
use samplegen::policy::TargetLanguage;
use samplegen::product::ProductConfig;
use std::collections::BTreeSet;

fn product() -> ProductConfig {
    let mut product = ProductConfig::new("google.example.library.v1", TargetLanguage::Java);
    product
        .packaging_files
        .insert("build.gradle".to_string(), "apply plugin: 'java'".to_string());
    product
}

fn files(entries: &[(&str, &str)]) -> ArtifactMap {
    let mut map = ArtifactMap::new();
    for (path, body) in entries {
        map.insert(*path, *body);
    }
    map
}

/// Generator that reads the product it is handed
struct ReadmeGenerator;

impl ArtifactGenerator for ReadmeGenerator {
    fn name(&self) -> &str {
        "readme"
    }

    fn input_names(&self) -> BTreeSet<String> {
        ["readme".to_string()].into_iter().collect()
    }

    fn generate(&self, product: &ProductConfig) -> Result<ArtifactMap, GenerationError> {
        let body = format!("# {}\n", product.package_name);
        Ok(files(&[("README.md", body.as_str())]))
    }
}

#[test]
fn test_builtin_and_custom_generators_share_one_namespace() {
    let mut orchestrator = GeneratorFactory::create(product());
    orchestrator.register(ArtifactKind::Surface, Box::new(ReadmeGenerator));
    let mut fixtures = ArtifactMap::new();
    fixtures.insert("testdata/logo.png", vec![0x89u8, 0x50]);
    orchestrator.register(
        ArtifactKind::Test,
        Box::new(StaticFileGenerator::new("fixtures", fixtures)),
    );

    let report = orchestrator
        .run_with_report(&ArtifactSelection::all(), &DiagCollector::new())
        .unwrap();

    let generators: Vec<&str> = report
        .contributions
        .iter()
        .map(|c| c.generator.as_str())
        .collect();
    assert_eq!(
        generators,
        vec!["packaging", "readme", "fixtures", "sample_imports", "sample_manifest"]
    );
    assert!(report.artifacts.contains("build.gradle"));
    assert_eq!(
        report.artifacts.get("README.md").and_then(|c| c.as_text()),
        Some("# google.example.library.v1\n")
    );
    assert_eq!(
        report.artifacts.to_display_map()["testdata/logo.png"],
        BINARY_PLACEHOLDER
    );
}

#[test]
fn test_conflicting_generators_abort_with_both_names() {
    let orchestrator = GenerationOrchestrator::new(product())
        .with_generator(
            ArtifactKind::Surface,
            StaticFileGenerator::new("gapic", files(&[("pom.xml", "<project/>")])),
        )
        .with_generator(
            ArtifactKind::Samples,
            StaticFileGenerator::new("sample_pom", files(&[("pom.xml", "<project/>")])),
        );

    let err = orchestrator
        .run_artifacts(&ArtifactSelection::all(), &DiagCollector::new())
        .unwrap_err();
    match err {
        GenerationError::FileConflict {
            path,
            first,
            second,
        } => {
            assert_eq!(path, "pom.xml");
            assert_eq!(first, "gapic");
            assert_eq!(second, "sample_pom");
        }
        other => panic!("expected conflict, got {}", other),
    }

    // the same pair is fine when only one side is selected
    let artifacts = orchestrator
        .run_artifacts(
            &ArtifactSelection::of([ArtifactKind::Samples]),
            &DiagCollector::new(),
        )
        .unwrap();
    assert_eq!(artifacts.paths().collect::<Vec<_>>(), vec!["pom.xml"]);
}

#[test]
fn test_unresolved_errors_stop_before_any_generator() {
    let mut diagnostics = DiagCollector::new();
    diagnostics.add_warning(Some("library.yaml:3"), "deprecated field");
    diagnostics.add_error(Some("library.yaml:9"), "unknown method 'ListShelves'");

    let err = GeneratorFactory::create(product())
        .run_artifacts(&ArtifactSelection::all(), &diagnostics)
        .unwrap_err();
    match &err {
        GenerationError::UnresolvedDiagnostics {
            error_count,
            diagnostics,
        } => {
            assert_eq!(*error_count, 1);
            assert_eq!(diagnostics.len(), 2);
            assert_eq!(diagnostics[1].severity, Severity::Error);
        }
        other => panic!("expected diagnostics error, got {}", other),
    }
    assert!(err.to_string().contains("unknown method 'ListShelves'"));
}

#[test]
fn test_warnings_alone_do_not_block_generation() {
    let mut diagnostics = DiagCollector::new();
    diagnostics.add_warning(None, "deprecated field");
    let artifacts = GeneratorFactory::create(product())
        .run_artifacts(&ArtifactSelection::of([ArtifactKind::Surface]), &diagnostics)
        .unwrap();
    assert_eq!(artifacts.len(), 1);
}

#[test]
fn test_input_filter_skips_unrelated_generators() {
    let mut orchestrator = GeneratorFactory::create(product());
    orchestrator.register(ArtifactKind::Surface, Box::new(ReadmeGenerator));

    let selection = ArtifactSelection::all().with_inputs(["readme"]);
    let report = orchestrator
        .run_with_report(&selection, &DiagCollector::new())
        .unwrap();

    assert_eq!(report.artifacts.paths().collect::<Vec<_>>(), vec!["README.md"]);
    assert_eq!(
        report.skipped,
        vec!["packaging", "sample_imports", "sample_manifest"]
    );
}
