//! Samplegen: Sample Import Collection and Artifact Orchestration
//!
//! Builds language-targeted output views for API method samples, infers the imports a
//! rendered sample needs, and runs several artifact generators against one resolved
//! product configuration while keeping their outputs in a single conflict-free namespace.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generation;
pub mod logging;
pub mod naming;
pub mod output;
pub mod policy;
pub mod product;
pub mod symbol_table;
pub mod types;

pub use error::{GenerationError, ViewError};
pub use output::{collect_imports, OutputView};
pub use policy::{ImportPolicy, TargetLanguage};
pub use symbol_table::SymbolTable;
pub use types::TypeRef;
