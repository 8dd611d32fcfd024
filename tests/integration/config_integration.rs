//! Integration tests for the layered configuration system

use super::test_utils::{with_xdg_env, write_file};
use samplegen::config::ConfigLoader;
use samplegen::generation::ArtifactKind;
use samplegen::policy::TargetLanguage;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.generation.language, "java");
    assert_eq!(
        config.generation.artifact_selection().unwrap().kinds(),
        &ArtifactKind::ALL
    );
    assert_eq!(config.logging.output, "stderr");
    assert!(config.validate().is_ok());
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    write_file(
        test_dir.path(),
        "samplegen/config.toml",
        r#"
[generation]
language = "python"
artifacts = ["samples"]

[logging]
level = "debug"
"#,
    );
    write_file(
        workspace.path(),
        "config/config.toml",
        r#"
[generation]
artifacts = ["surface", "samples"]
"#,
    );

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(
        config.generation.target_language().unwrap(),
        TargetLanguage::Python
    );
    assert_eq!(config.generation.artifacts, vec!["surface", "samples"]);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_environment_specific_file_wins() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    write_file(
        workspace.path(),
        "config/config.toml",
        "[generation]\nlanguage = \"python\"\n",
    );
    write_file(
        workspace.path(),
        "config/development.toml",
        "[generation]\nlanguage = \"java\"\nfrozen_timestamp = \"2019-08-01T00:00:00Z\"\n",
    );

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.generation.language, "java");
    assert_eq!(
        config
            .generation
            .frozen_timestamp
            .map(|ts| ts.to_rfc3339()),
        Some("2019-08-01T00:00:00+00:00".to_string())
    );
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("samplegen.toml");
    std::fs::write(
        &path,
        r#"
[generation]
language = "kotlin"
artifacts = ["surface", "docs"]

[logging]
output = "syslog"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    let errors = config.validate().unwrap_err();
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(rendered.len(), 3, "{:?}", rendered);
    assert!(rendered[0].contains("kotlin"));
    assert!(rendered[1].contains("docs"));
    assert!(rendered[2].contains("syslog"));

    let err = config.validated().unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));
}
