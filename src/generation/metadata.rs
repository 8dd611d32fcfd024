//! Sample metadata naming
//!
//! Per-language facts recorded in the sample manifest: runtime environment, runner binary,
//! invocation template, base path, and where each sample lives.

use crate::naming::Name;
use crate::product::ProductConfig;

pub trait SampleMetadataNamer: Send + Sync {
    fn environment(&self) -> &'static str;

    fn base_path(&self, product: &ProductConfig) -> String;

    fn bin(&self) -> &'static str;

    fn invocation(&self) -> &'static str;

    /// Manifest path of a sample, relative to `{base_path}`
    fn sample_path(&self, sample_id: &str) -> String;

    /// Repository path of the rendered sample file
    fn sample_file_path(&self, product: &ProductConfig, sample_id: &str) -> String;

    /// Namespace holding the versioned client and its helper modules
    fn versioned_namespace(&self, product: &ProductConfig) -> String {
        product.package_name.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSampleMetadataNamer;

impl JavaSampleMetadataNamer {
    fn example_package(product: &ProductConfig) -> String {
        let package = product
            .client_package
            .as_deref()
            .unwrap_or(product.package_name.as_str());
        format!("{}.examples", package)
    }
}

impl SampleMetadataNamer for JavaSampleMetadataNamer {
    fn environment(&self) -> &'static str {
        "java"
    }

    fn base_path(&self, product: &ProductConfig) -> String {
        Self::example_package(product)
    }

    fn bin(&self) -> &'static str {
        "gradle run"
    }

    fn invocation(&self) -> &'static str {
        "{bin} -PmainClass={path} --args='@args'"
    }

    fn sample_path(&self, sample_id: &str) -> String {
        format!("{{base_path}}.{}", Name::from(sample_id).to_upper_camel())
    }

    fn sample_file_path(&self, product: &ProductConfig, sample_id: &str) -> String {
        format!(
            "samples/src/main/java/{}/{}.java",
            Self::example_package(product).replace('.', "/"),
            Name::from(sample_id).to_upper_camel()
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonSampleMetadataNamer;

impl SampleMetadataNamer for PythonSampleMetadataNamer {
    fn environment(&self) -> &'static str {
        "python"
    }

    fn base_path(&self, _product: &ProductConfig) -> String {
        "samples".to_string()
    }

    fn bin(&self) -> &'static str {
        "python3"
    }

    fn invocation(&self) -> &'static str {
        "{bin} {path} @args"
    }

    fn sample_path(&self, sample_id: &str) -> String {
        format!("{{base_path}}/{}.py", Name::from(sample_id).to_lower_underscore())
    }

    fn sample_file_path(&self, _product: &ProductConfig, sample_id: &str) -> String {
        format!("samples/{}.py", Name::from(sample_id).to_lower_underscore())
    }

    /// `google.example.library.v1` becomes `google.example.library_v1`
    fn versioned_namespace(&self, product: &ProductConfig) -> String {
        let package = product
            .client_package
            .as_deref()
            .unwrap_or(product.package_name.as_str());
        match package.rsplit_once('.') {
            Some((head, version)) if is_version(version) => format!("{}_{}", head, version),
            _ => package.to_string(),
        }
    }
}

fn is_version(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next() == Some('v') && chars.next().is_some_and(|c| c.is_ascii_digit())
}
