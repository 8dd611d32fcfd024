//! Language import policies
//!
//! Each target language supplies a small capability object that answers two questions for
//! the import collector: which import statements a type needs, and whether a printed
//! variable needs an auxiliary import beyond its own type. The collector never looks at
//! import syntax itself.

use crate::error::GenerationError;
use crate::output::VariableSegment;
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod java;
mod python;

pub use java::JavaImportPolicy;
pub use python::PythonImportPolicy;

/// Supported target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Java,
    Python,
}

impl TargetLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Java => "java",
            TargetLanguage::Python => "python",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(TargetLanguage::Java),
            "python" | "py" => Ok(TargetLanguage::Python),
            other => Err(GenerationError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Import capability for one target language.
pub trait ImportPolicy: Send + Sync {
    fn language(&self) -> TargetLanguage;

    /// Import statements needed to use `ty` by its nickname. Collections are asked
    /// about the container only; their element is reserved separately.
    fn imports_for(&self, ty: &TypeRef) -> Vec<String>;

    /// Extra import a printed variable needs beyond its own type, if any.
    fn auxiliary_import(&self, variable: &VariableSegment) -> Option<String>;

    /// Display name for a collection given its element's nickname.
    fn collection_nickname(&self, element_nickname: &str) -> String;
}
