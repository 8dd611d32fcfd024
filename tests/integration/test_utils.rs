//! Shared test utilities for integration tests
//!
//! Isolates the global config location and provides a resolved product fixture.

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes access to process environment variables across tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    samplegen_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            samplegen_env: std::env::var("SAMPLEGEN_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("SAMPLEGEN_ENV", self.samplegen_env);
    }
}

fn restore_var(key: &str, value: Option<String>) {
    match value {
        Some(orig) => std::env::set_var(key, orig),
        None => std::env::remove_var(key),
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`.
///
/// The global config file then lives at `{test_dir}/samplegen/config.toml`.
/// SAMPLEGEN_ENV is cleared so workspace files resolve to `development`.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());
    std::env::remove_var("SAMPLEGEN_ENV");

    let result = f();

    env_state.restore();

    result
}

/// Write `contents` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Library API product with two methods, one packaging file, and a frozen timestamp.
///
/// `list_books` loops over books and prints a title and an enum genre; `get_book`
/// defines a single book. Pass `None` to leave `language` out of the JSON.
pub fn library_product_json(language: Option<&str>) -> String {
    let language_field = language
        .map(|l| format!(r#""language": "{}","#, l))
        .unwrap_or_default();
    format!(
        r#"{{
  "package_name": "google.example.library.v1",
  {language_field}
  "generation_timestamp": "2019-08-01T00:00:00Z",
  "packaging_files": {{"build.gradle": "apply plugin: 'java'"}},
  "interfaces": [{{
    "name": "LibraryService",
    "methods": [
      {{"name": "ListBooks", "samples": [{{
        "id": "list_books",
        "region_tag": "library_list_books",
        "calling_form": "paged",
        "outputs": [
          {{"kind": "comment", "lines": ["Print each book"]}},
          {{"kind": "loop", "variable": "book",
            "collection": {{"kind": "collection",
                            "element": {{"identity": "google.example.library.v1.Book", "kind": "message"}}}},
            "body": [
              {{"kind": "print", "format": "%s (%s)", "args": [
                {{"segments": [{{"kind": "variable", "name": "book.title",
                                 "type": {{"identity": "string", "kind": "primitive"}}}}]}},
                {{"segments": [{{"kind": "variable", "name": "book.genre",
                                 "type": {{"identity": "google.example.library.v1.Genre", "kind": "enum"}}}}]}}
              ]}}
            ]}}
        ]
      }}]}},
      {{"name": "GetBook", "samples": [{{
        "id": "get_book",
        "outputs": [
          {{"kind": "define", "variable": "book",
            "reference": {{"identity": "google.example.library.v1.Book", "kind": "message"}}}}
        ]
      }}]}}
    ]
  }}]
}}"#
    )
}
