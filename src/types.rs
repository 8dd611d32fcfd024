//! Semantic type references
//!
//! Identifies a type drawn from the API description: a message, an enum, a primitive,
//! or a collection of another type. References compare, hash, and order by identity only.

use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of a semantic type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Message,
    Enum,
    Primitive,
    Collection,
}

/// Reference to a type in the API description.
///
/// Identities are dot-separated (`google.example.library.v1.Book`). A collection's
/// identity is derived from its element (`repeated google.example.library.v1.Book`)
/// unless one is given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTypeRef", into = "RawTypeRef")]
pub struct TypeRef {
    identity: String,
    kind: TypeKind,
    element: Option<Box<TypeRef>>,
}

/// Wire form of [`TypeRef`]; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTypeRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    identity: String,
    kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    element: Option<Box<TypeRef>>,
}

const COLLECTION_PREFIX: &str = "repeated ";

impl TypeRef {
    /// Reference to a message type
    pub fn message(identity: impl Into<String>) -> Result<Self, ViewError> {
        Self::named(identity.into(), TypeKind::Message)
    }

    /// Reference to an enum type
    pub fn enumeration(identity: impl Into<String>) -> Result<Self, ViewError> {
        Self::named(identity.into(), TypeKind::Enum)
    }

    /// Reference to a primitive (`string`, `int64`, `bytes`, ...)
    pub fn primitive(identity: impl Into<String>) -> Result<Self, ViewError> {
        Self::named(identity.into(), TypeKind::Primitive)
    }

    /// Collection of `element`
    pub fn collection(element: TypeRef) -> Self {
        Self {
            identity: format!("{}{}", COLLECTION_PREFIX, element.identity),
            kind: TypeKind::Collection,
            element: Some(Box::new(element)),
        }
    }

    fn named(identity: String, kind: TypeKind) -> Result<Self, ViewError> {
        validate_identity(&identity)?;
        Ok(Self {
            identity,
            kind,
            element: None,
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Element type for collections, `None` otherwise
    pub fn element(&self) -> Option<&TypeRef> {
        self.element.as_deref()
    }

    /// Identity split on `.`, outermost namespace first
    pub fn segments(&self) -> Vec<&str> {
        self.identity.split('.').collect()
    }

    /// Last identity segment
    pub fn simple_name(&self) -> &str {
        self.identity
            .rsplit('.')
            .next()
            .unwrap_or(self.identity.as_str())
    }
}

fn validate_identity(identity: &str) -> Result<(), ViewError> {
    if identity.trim().is_empty() {
        return Err(ViewError::EmptyTypeIdentity);
    }
    let malformed = identity.split('.').any(|segment| {
        segment.is_empty() || segment.chars().any(char::is_whitespace)
    });
    if malformed {
        return Err(ViewError::MalformedTypeIdentity(identity.to_string()));
    }
    Ok(())
}

impl TryFrom<RawTypeRef> for TypeRef {
    type Error = ViewError;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        match (raw.kind, raw.element) {
            (TypeKind::Collection, Some(element)) => {
                let mut collection = TypeRef::collection(*element);
                if !raw.identity.is_empty() {
                    validate_identity(&raw.identity)?;
                    if collection.element().map(TypeRef::identity) == Some(raw.identity.as_str()) {
                        return Err(ViewError::CollectionShadowsElement(raw.identity));
                    }
                    collection.identity = raw.identity;
                }
                Ok(collection)
            }
            (TypeKind::Collection, None) => Err(ViewError::MissingElementType),
            (_, Some(_)) => Err(ViewError::UnexpectedElementType(raw.identity)),
            (kind, None) => TypeRef::named(raw.identity, kind),
        }
    }
}

impl From<TypeRef> for RawTypeRef {
    fn from(ty: TypeRef) -> Self {
        Self {
            identity: ty.identity,
            kind: ty.kind,
            element: ty.element,
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl PartialOrd for TypeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity.cmp(&other.identity)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)
    }
}
