//! Built-in sample generators.
//!
//! `SampleImportGenerator` runs the import collector over every sample's output views with
//! a fresh symbol table per sample and records the resolved import section. Rendering the
//! sample body itself is left to language templates. `SampleManifestGenerator` records
//! per-language sample metadata.

use crate::error::GenerationError;
use crate::generation::artifact::{ArtifactGenerator, ArtifactMap};
use crate::generation::metadata::SampleMetadataNamer;
use crate::output::collect_imports;
use crate::policy::ImportPolicy;
use crate::product::{ProductConfig, SampleRef};
use crate::symbol_table::SymbolTable;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

const SAMPLES_INPUT: &str = "samples";
const MANIFEST_VERSION: u32 = 3;

fn sample_inputs(product: &ProductConfig) -> BTreeSet<String> {
    let mut inputs: BTreeSet<String> = product.sample_ids().into_iter().collect();
    inputs.insert(SAMPLES_INPUT.to_string());
    inputs
}

#[derive(Debug, Serialize)]
struct ImportSection<'a> {
    sample: &'a str,
    interface: &'a str,
    method: &'a str,
    imports: Vec<&'a str>,
    nicknames: Vec<NicknameEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct NicknameEntry<'a> {
    #[serde(rename = "type")]
    identity: &'a str,
    nickname: &'a str,
}

pub struct SampleImportGenerator {
    policy: Arc<dyn ImportPolicy>,
    namer: Arc<dyn SampleMetadataNamer>,
    inputs: BTreeSet<String>,
}

impl SampleImportGenerator {
    pub const NAME: &'static str = "sample_imports";

    pub fn new(
        product: &ProductConfig,
        policy: Arc<dyn ImportPolicy>,
        namer: Arc<dyn SampleMetadataNamer>,
    ) -> Self {
        Self {
            policy,
            namer,
            inputs: sample_inputs(product),
        }
    }

    /// Collect imports for one sample into a fresh table
    pub fn collect_sample(&self, sample: SampleRef<'_>) -> Result<SymbolTable, GenerationError> {
        let mut table = SymbolTable::new(self.policy.clone());
        collect_imports(&sample.sample.outputs, &mut table, self.policy.as_ref())?;
        Ok(table)
    }

    fn render(sample: SampleRef<'_>, table: &SymbolTable) -> Result<String, GenerationError> {
        let section = ImportSection {
            sample: &sample.sample.id,
            interface: &sample.interface.name,
            method: &sample.method.name,
            imports: table.imports().iter().map(String::as_str).collect(),
            nicknames: table
                .entries()
                .map(|(ty, nickname)| NicknameEntry {
                    identity: ty.identity(),
                    nickname,
                })
                .collect(),
        };
        Ok(toml::to_string(&section)?)
    }
}

impl ArtifactGenerator for SampleImportGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn input_names(&self) -> BTreeSet<String> {
        self.inputs.clone()
    }

    fn generate(&self, product: &ProductConfig) -> Result<ArtifactMap, GenerationError> {
        let mut out = ArtifactMap::new();
        let mut owners: BTreeMap<String, &str> = BTreeMap::new();

        for sample in product.samples() {
            let table = self.collect_sample(sample)?;
            let path = format!(
                "{}.imports.toml",
                self.namer.sample_file_path(product, &sample.sample.id)
            );
            if let Some(previous) = owners.insert(path.clone(), &sample.sample.id) {
                return Err(GenerationError::FileConflict {
                    path,
                    first: format!("{}:{}", Self::NAME, previous),
                    second: format!("{}:{}", Self::NAME, sample.sample.id),
                });
            }

            debug!(
                sample = sample.sample.id.as_str(),
                imports = table.imports().len(),
                "Resolved sample imports"
            );
            out.insert(path, Self::render(sample, &table)?);
        }

        Ok(out)
    }
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    version: u32,
    environment: &'a str,
    bin: &'a str,
    base_path: String,
    invocation: &'a str,
    generated_at: String,
    samples: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    sample: &'a str,
    path: String,
    interface: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    region_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calling_form: Option<&'a str>,
}

pub struct SampleManifestGenerator {
    namer: Arc<dyn SampleMetadataNamer>,
    inputs: BTreeSet<String>,
}

impl SampleManifestGenerator {
    pub const NAME: &'static str = "sample_manifest";

    pub fn new(product: &ProductConfig, namer: Arc<dyn SampleMetadataNamer>) -> Self {
        Self {
            namer,
            inputs: sample_inputs(product),
        }
    }

    pub fn manifest_path(&self) -> String {
        format!("samples/{}.manifest.toml", self.namer.environment())
    }
}

impl ArtifactGenerator for SampleManifestGenerator {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn input_names(&self) -> BTreeSet<String> {
        self.inputs.clone()
    }

    fn generate(&self, product: &ProductConfig) -> Result<ArtifactMap, GenerationError> {
        let manifest = Manifest {
            version: MANIFEST_VERSION,
            environment: self.namer.environment(),
            bin: self.namer.bin(),
            base_path: self.namer.base_path(product),
            invocation: self.namer.invocation(),
            generated_at: product.generation_timestamp.to_rfc3339(),
            samples: product
                .samples()
                .map(|s| ManifestEntry {
                    sample: &s.sample.id,
                    path: self.namer.sample_path(&s.sample.id),
                    interface: &s.interface.name,
                    method: &s.method.name,
                    region_tag: s.sample.region_tag.as_deref(),
                    calling_form: s.sample.calling_form.as_deref(),
                })
                .collect(),
        };

        let mut out = ArtifactMap::new();
        out.insert(self.manifest_path(), toml::to_string(&manifest)?);
        Ok(out)
    }
}
