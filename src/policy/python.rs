//! Python import policy. Samples work with plain values, so types themselves need no
//! import; printing an enum-typed variable pulls in the versioned `enums` module once.

use super::{ImportPolicy, TargetLanguage};
use crate::output::VariableSegment;
use crate::types::TypeRef;

#[derive(Debug, Clone)]
pub struct PythonImportPolicy {
    /// Versioned client namespace, e.g. `google.cloud.library_v1`
    versioned_namespace: String,
}

impl PythonImportPolicy {
    pub fn new(versioned_namespace: impl Into<String>) -> Self {
        Self {
            versioned_namespace: versioned_namespace.into(),
        }
    }

    /// Import statement for the versioned enums module
    pub fn enums_import(&self) -> String {
        format!("from {} import enums", self.versioned_namespace)
    }
}

impl ImportPolicy for PythonImportPolicy {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn imports_for(&self, _ty: &TypeRef) -> Vec<String> {
        Vec::new()
    }

    fn auxiliary_import(&self, variable: &VariableSegment) -> Option<String> {
        variable.is_enum().then(|| self.enums_import())
    }

    fn collection_nickname(&self, element_nickname: &str) -> String {
        format!("list[{}]", element_nickname)
    }
}
