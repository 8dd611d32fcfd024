//! Integration tests for the built-in sample generators

use super::test_utils::library_product_json;
use samplegen::diagnostics::DiagCollector;
use samplegen::generation::{ArtifactKind, ArtifactSelection, GeneratorFactory};
use samplegen::product::ProductConfig;

const JAVA_LIST_BOOKS: &str =
    "samples/src/main/java/google/example/library/v1/examples/ListBooks.java.imports.toml";
const JAVA_GET_BOOK: &str =
    "samples/src/main/java/google/example/library/v1/examples/GetBook.java.imports.toml";

fn product(language: &str) -> ProductConfig {
    serde_json::from_str(&library_product_json(Some(language))).unwrap()
}

fn toml_file(artifacts: &samplegen::generation::ArtifactMap, path: &str) -> toml::Value {
    let body = artifacts
        .get(path)
        .and_then(|content| content.as_text())
        .unwrap_or_else(|| panic!("missing {}", path));
    toml::from_str(body).unwrap()
}

fn strings(value: &toml::Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[test]
fn test_java_import_sections_per_sample() {
    let orchestrator = GeneratorFactory::create(product("java"));
    let artifacts = orchestrator
        .run_artifacts(
            &ArtifactSelection::of([ArtifactKind::Samples]),
            &DiagCollector::new(),
        )
        .unwrap();

    let list_books = toml_file(&artifacts, JAVA_LIST_BOOKS);
    assert_eq!(list_books["sample"].as_str(), Some("list_books"));
    assert_eq!(list_books["interface"].as_str(), Some("LibraryService"));
    assert_eq!(
        strings(&list_books["imports"]),
        vec![
            "import google.example.library.v1.Book;",
            "import google.example.library.v1.Genre;",
        ]
    );
    let nicknames: Vec<&str> = list_books["nicknames"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["nickname"].as_str().unwrap())
        .collect();
    assert_eq!(nicknames, vec!["Book", "string", "Genre"]);

    // each sample gets its own table
    let get_book = toml_file(&artifacts, JAVA_GET_BOOK);
    assert_eq!(
        strings(&get_book["imports"]),
        vec!["import google.example.library.v1.Book;"]
    );
}

#[test]
fn test_python_enum_prints_add_enums_module_once() {
    let orchestrator = GeneratorFactory::create(product("python"));
    let artifacts = orchestrator
        .run_artifacts(
            &ArtifactSelection::of([ArtifactKind::Samples]),
            &DiagCollector::new(),
        )
        .unwrap();

    let list_books = toml_file(&artifacts, "samples/list_books.py.imports.toml");
    assert_eq!(
        strings(&list_books["imports"]),
        vec!["from google.example.library_v1 import enums"]
    );
    let get_book = toml_file(&artifacts, "samples/get_book.py.imports.toml");
    assert!(get_book["imports"].as_array().unwrap().is_empty());
}

#[test]
fn test_manifest_uses_frozen_timestamp_and_sample_paths() {
    let orchestrator = GeneratorFactory::create(product("java"));
    let artifacts = orchestrator
        .run_artifacts(
            &ArtifactSelection::of([ArtifactKind::Samples]),
            &DiagCollector::new(),
        )
        .unwrap();

    let manifest = toml_file(&artifacts, "samples/java.manifest.toml");
    assert_eq!(manifest["version"].as_integer(), Some(3));
    assert_eq!(manifest["bin"].as_str(), Some("gradle run"));
    assert_eq!(
        manifest["base_path"].as_str(),
        Some("google.example.library.v1.examples")
    );
    assert_eq!(
        manifest["generated_at"].as_str(),
        Some("2019-08-01T00:00:00+00:00")
    );

    let samples = manifest["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0]["path"].as_str(), Some("{base_path}.ListBooks"));
    assert_eq!(samples[0]["region_tag"].as_str(), Some("library_list_books"));
    assert!(samples[1].get("region_tag").is_none());
}

#[test]
fn test_samples_are_byte_for_byte_reproducible() {
    let selection = ArtifactSelection::all();
    let first = GeneratorFactory::create(product("java"))
        .run_artifacts(&selection, &DiagCollector::new())
        .unwrap();
    let second = GeneratorFactory::create(product("java"))
        .run_artifacts(&selection, &DiagCollector::new())
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_malformed_loop_fails_the_import_generator() {
    let json = r#"{
        "package_name": "a.v1",
        "language": "java",
        "interfaces": [{"name": "S", "methods": [{"name": "M", "samples": [{
            "id": "bad",
            "outputs": [{"kind": "loop", "variable": "x",
                         "collection": {"identity": "a.v1.Book", "kind": "message"}}]
        }]}]}]
    }"#;
    let product: ProductConfig = serde_json::from_str(json).unwrap();
    let err = GeneratorFactory::create(product)
        .run_artifacts(
            &ArtifactSelection::of([ArtifactKind::Samples]),
            &DiagCollector::new(),
        )
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("sample_imports"), "{}", message);
    assert!(message.contains("non-collection"), "{}", message);
}
