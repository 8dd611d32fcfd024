//! Java import policy: one `import` per referenced message or enum, `java.util.List` for
//! collections. Java samples print enums through their own type, so no auxiliary imports.

use super::{ImportPolicy, TargetLanguage};
use crate::output::VariableSegment;
use crate::types::{TypeKind, TypeRef};

const LIST_IMPORT: &str = "import java.util.List;";
const BYTE_STRING_IMPORT: &str = "import com.google.protobuf.ByteString;";

#[derive(Debug, Clone, Default)]
pub struct JavaImportPolicy {
    /// Java package replacing the proto namespace of referenced types
    package_override: Option<String>,
}

impl JavaImportPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package_override: Some(package.into()),
        }
    }

    fn qualified_name(&self, ty: &TypeRef) -> String {
        match &self.package_override {
            Some(package) => format!("{}.{}", package, ty.simple_name()),
            None => ty.identity().to_string(),
        }
    }
}

impl ImportPolicy for JavaImportPolicy {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Java
    }

    fn imports_for(&self, ty: &TypeRef) -> Vec<String> {
        match ty.kind() {
            TypeKind::Message | TypeKind::Enum => {
                vec![format!("import {};", self.qualified_name(ty))]
            }
            TypeKind::Primitive if ty.identity() == "bytes" => vec![BYTE_STRING_IMPORT.to_string()],
            TypeKind::Primitive => Vec::new(),
            TypeKind::Collection => vec![LIST_IMPORT.to_string()],
        }
    }

    fn auxiliary_import(&self, _variable: &VariableSegment) -> Option<String> {
        None
    }

    fn collection_nickname(&self, element_nickname: &str) -> String {
        format!("List<{}>", element_nickname)
    }
}
