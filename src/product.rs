//! Resolved product configuration
//!
//! The already-resolved API surface handed to every artifact generator: package identity,
//! target language, per-interface and per-method sample contexts, and any static packaging
//! files. Loading API descriptions is someone else's job; this is what they hand over.

use crate::diagnostics::DiagCollector;
use crate::output::OutputView;
use crate::policy::TargetLanguage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Proto package of the API, e.g. `google.example.library.v1`
    pub package_name: String,

    pub language: TargetLanguage,

    /// Client package in the target language, when it differs from the proto package
    #[serde(default)]
    pub client_package: Option<String>,

    /// Timestamp stamped into generated metadata; frozen in tests
    #[serde(default = "Utc::now")]
    pub generation_timestamp: DateTime<Utc>,

    #[serde(default)]
    pub interfaces: Vec<InterfaceContext>,

    /// Static packaging files (path -> text), emitted with the surface artifact
    #[serde(default)]
    pub packaging_files: BTreeMap<String, String>,

    /// Diagnostics raised while resolving the model; any error blocks generation
    #[serde(default)]
    pub diagnostics: DiagCollector,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceContext {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodContext {
    pub name: String,
    #[serde(default)]
    pub samples: Vec<SampleContext>,
}

/// One sample of a method call and the views describing its output handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleContext {
    /// Unique sample id; also the input name generators declare for it
    pub id: String,
    #[serde(default)]
    pub region_tag: Option<String>,
    #[serde(default)]
    pub calling_form: Option<String>,
    #[serde(default)]
    pub outputs: Vec<OutputView>,
}

/// A sample together with the interface and method it belongs to
#[derive(Debug, Clone, Copy)]
pub struct SampleRef<'a> {
    pub interface: &'a InterfaceContext,
    pub method: &'a MethodContext,
    pub sample: &'a SampleContext,
}

impl ProductConfig {
    pub fn new(package_name: impl Into<String>, language: TargetLanguage) -> Self {
        Self {
            package_name: package_name.into(),
            language,
            client_package: None,
            generation_timestamp: Utc::now(),
            interfaces: Vec::new(),
            packaging_files: BTreeMap::new(),
            diagnostics: DiagCollector::new(),
        }
    }

    pub fn with_generation_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generation_timestamp = timestamp;
        self
    }

    /// Every sample in declaration order
    pub fn samples(&self) -> impl Iterator<Item = SampleRef<'_>> {
        self.interfaces.iter().flat_map(|interface| {
            interface.methods.iter().flat_map(move |method| {
                method.samples.iter().map(move |sample| SampleRef {
                    interface,
                    method,
                    sample,
                })
            })
        })
    }

    /// Sample ids in declaration order
    pub fn sample_ids(&self) -> Vec<String> {
        self.samples().map(|s| s.sample.id.clone()).collect()
    }
}
