//! Generator emitting a fixed set of files (packaging files, binary payloads).

use crate::error::GenerationError;
use crate::generation::artifact::{ArtifactGenerator, ArtifactMap, GeneratedContent};
use crate::product::ProductConfig;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct StaticFileGenerator {
    name: String,
    inputs: BTreeSet<String>,
    files: ArtifactMap,
}

impl StaticFileGenerator {
    pub fn new(name: impl Into<String>, files: ArtifactMap) -> Self {
        Self {
            name: name.into(),
            inputs: BTreeSet::new(),
            files,
        }
    }

    /// Packaging files declared by the product, if any
    pub fn packaging(product: &ProductConfig) -> Option<Self> {
        if product.packaging_files.is_empty() {
            return None;
        }
        let files: ArtifactMap = product
            .packaging_files
            .iter()
            .map(|(path, body)| (path.clone(), GeneratedContent::Text(body.clone())))
            .collect();
        Some(Self::new("packaging", files).with_inputs(["packaging"]))
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }
}

impl ArtifactGenerator for StaticFileGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_names(&self) -> BTreeSet<String> {
        self.inputs.clone()
    }

    fn generate(&self, _product: &ProductConfig) -> Result<ArtifactMap, GenerationError> {
        Ok(self.files.clone())
    }
}
