//! Config loading facade: builds the layered source stack and deserializes it.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::SamplegenConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment prefix for overrides, e.g. `SAMPLEGEN__GENERATION__LANGUAGE=python`
const ENV_PREFIX: &str = "SAMPLEGEN";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root`.
    ///
    /// Precedence (highest first): environment, `config/{SAMPLEGEN_ENV}.toml`,
    /// `config/config.toml`, global file, defaults.
    pub fn load(workspace_root: &Path) -> Result<SamplegenConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("generation.artifacts")
                .with_list_parse_key("generation.snippets")
                .try_parsing(true),
        );

        debug!(workspace = %workspace_root.display(), "Loading configuration");
        builder.build()?.try_deserialize()
    }

    /// Load from one explicit file on top of defaults
    pub fn load_from_file(path: &Path) -> Result<SamplegenConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Path of the global config file, if `HOME` is set
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
