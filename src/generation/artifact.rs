//! Artifact contract: kinds, generated content, path maps, and the generator trait.

use crate::error::GenerationError;
use crate::product::ProductConfig;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::{Component, Path};
use std::str::FromStr;
use tracing::debug;

/// Shown in place of binary bodies in rendered output
pub const BINARY_PLACEHOLDER: &str = "Static or binary file content is not shown.";

/// Category of generated output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Surface,
    Test,
    Samples,
}

impl ArtifactKind {
    /// Default run order
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Surface,
        ArtifactKind::Test,
        ArtifactKind::Samples,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Surface => "surface",
            ArtifactKind::Test => "test",
            ArtifactKind::Samples => "samples",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "surface" => Ok(ArtifactKind::Surface),
            "test" => Ok(ArtifactKind::Test),
            "samples" => Ok(ArtifactKind::Samples),
            other => Err(GenerationError::UnknownArtifact(other.to_string())),
        }
    }
}

/// Which artifacts to run, in order, optionally scoped to named inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSelection {
    kinds: Vec<ArtifactKind>,
    inputs: Option<BTreeSet<String>>,
}

impl ArtifactSelection {
    /// Select `kinds` in the given order; repeats are dropped.
    pub fn of(kinds: impl IntoIterator<Item = ArtifactKind>) -> Self {
        let mut ordered = Vec::new();
        for kind in kinds {
            if !ordered.contains(&kind) {
                ordered.push(kind);
            }
        }
        Self {
            kinds: ordered,
            inputs: None,
        }
    }

    pub fn all() -> Self {
        Self::of(ArtifactKind::ALL)
    }

    /// Parse artifact names such as `["surface", "samples"]`
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, GenerationError> {
        let kinds = names
            .iter()
            .map(|name| name.as_ref().parse::<ArtifactKind>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::of(kinds))
    }

    /// Only run generators declaring at least one of `inputs`
    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = Some(inputs.into_iter().map(Into::into).collect());
        self
    }

    pub fn kinds(&self) -> &[ArtifactKind] {
        &self.kinds
    }

    pub fn inputs(&self) -> Option<&BTreeSet<String>> {
        self.inputs.as_ref()
    }

    /// Whether a generator declaring `declared` passes the input allow-list
    pub fn admits(&self, declared: &BTreeSet<String>) -> bool {
        match &self.inputs {
            Some(allowed) => !allowed.is_disjoint(declared),
            None => true,
        }
    }
}

impl Default for ArtifactSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Body of one generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    Text(String),
    Binary(Vec<u8>),
}

impl GeneratedContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            GeneratedContent::Text(text) => text.as_bytes(),
            GeneratedContent::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GeneratedContent::Text(text) => Some(text),
            GeneratedContent::Binary(_) => None,
        }
    }

    /// Text bodies as-is, binary bodies replaced by [`BINARY_PLACEHOLDER`]
    pub fn display_body(&self) -> Cow<'_, str> {
        match self {
            GeneratedContent::Text(text) => Cow::Borrowed(text),
            GeneratedContent::Binary(_) => Cow::Borrowed(BINARY_PLACEHOLDER),
        }
    }
}

impl From<String> for GeneratedContent {
    fn from(text: String) -> Self {
        GeneratedContent::Text(text)
    }
}

impl From<&str> for GeneratedContent {
    fn from(text: &str) -> Self {
        GeneratedContent::Text(text.to_string())
    }
}

impl From<Vec<u8>> for GeneratedContent {
    fn from(bytes: Vec<u8>) -> Self {
        GeneratedContent::Binary(bytes)
    }
}

/// Output path -> content, ordered by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMap {
    files: BTreeMap<String, GeneratedContent>,
}

impl ArtifactMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, returning the content it replaced
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<GeneratedContent>,
    ) -> Option<GeneratedContent> {
        self.files.insert(path.into(), content.into())
    }

    pub fn get(&self, path: &str) -> Option<&GeneratedContent> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedContent)> {
        self.files.iter().map(|(path, content)| (path.as_str(), content))
    }

    /// Path -> display body, as shown in baselines and JSON output
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        self.files
            .iter()
            .map(|(path, content)| (path.clone(), content.display_body().into_owned()))
            .collect()
    }

    /// blake3 digest over every path and body, in path order
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (path, content) in &self.files {
            let bytes = content.as_bytes();
            hasher.update(&(path.len() as u64).to_le_bytes());
            hasher.update(path.as_bytes());
            hasher.update(&(bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        }
        hex::encode(hasher.finalize().as_bytes())
    }

    /// Write every file under `root`, creating parent directories.
    ///
    /// Every path is normalized and checked before anything is written: paths escaping
    /// `root`, two keys naming the same file, and a file that is also another file's
    /// directory all fail with nothing on disk.
    pub fn write_to(&self, root: &Path) -> Result<usize, GenerationError> {
        // Resolve targets first
        let mut targets: BTreeMap<String, (&str, &GeneratedContent)> = BTreeMap::new();
        for (path, content) in &self.files {
            let normalized = normalize_output_path(path)?;
            if let Some((first, _)) = targets.insert(normalized.clone(), (path.as_str(), content)) {
                return Err(GenerationError::FileConflict {
                    path: normalized,
                    first: first.to_string(),
                    second: path.clone(),
                });
            }
        }

        // A file cannot also be a parent directory
        for path in targets.keys() {
            let prefix = format!("{}/", path);
            let nested = targets
                .range(prefix.clone()..)
                .next()
                .filter(|(candidate, _)| candidate.starts_with(&prefix));
            if let Some((nested, _)) = nested {
                return Err(GenerationError::FileConflict {
                    path: path.clone(),
                    first: path.clone(),
                    second: nested.clone(),
                });
            }
        }

        for (path, (_, content)) in &targets {
            let target = root.join(path);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, content.as_bytes())?;
            debug!(path = %target.display(), "Wrote generated file");
        }
        Ok(targets.len())
    }
}

/// Normalize a generated output path: drop `.` segments and join with `/`.
///
/// Absolute paths, `..`, and paths with no file segment are rejected.
pub fn normalize_output_path(path: &str) -> Result<String, GenerationError> {
    let mut segments = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => {
                return Err(GenerationError::IoError(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Output path escapes output directory: {}", path),
                )))
            }
        }
    }
    if segments.is_empty() {
        return Err(GenerationError::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output path names no file: '{}'", path),
        )));
    }
    Ok(segments.join("/"))
}

impl FromIterator<(String, GeneratedContent)> for ArtifactMap {
    fn from_iter<T: IntoIterator<Item = (String, GeneratedContent)>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ArtifactMap {
    type Item = (String, GeneratedContent);
    type IntoIter = std::collections::btree_map::IntoIter<String, GeneratedContent>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// A black-box generator producing one artifact's files.
pub trait ArtifactGenerator {
    /// Stable name used in logs and conflict reports
    fn name(&self) -> &str;

    /// Named inputs this generator covers (sample ids, snippet names, ...)
    fn input_names(&self) -> BTreeSet<String>;

    fn generate(&self, product: &ProductConfig) -> Result<ArtifactMap, GenerationError>;
}
