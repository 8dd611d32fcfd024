//! CLI presentation: text and json formatters for generation and config validation.

use crate::config::{SamplegenConfig, ValidationError};
use crate::error::GenerationError;
use crate::generation::GenerationReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

/// Table of generated files with owning generator and size, plus a summary footer.
pub fn format_generation_text(report: &GenerationReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Path", "Generator", "Artifact", "Bytes"]);

    for contribution in &report.contributions {
        for path in &contribution.paths {
            let bytes = report
                .artifacts
                .get(path)
                .map(|content| content.as_bytes().len())
                .unwrap_or(0);
            table.add_row(vec![
                path.clone(),
                contribution.generator.clone(),
                contribution.kind.to_string(),
                bytes.to_string(),
            ]);
        }
    }

    let mut out = String::new();
    if report.artifacts.is_empty() {
        out.push_str("No files generated.\n");
    } else {
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} file(s), fingerprint {}",
        report.artifacts.len(),
        report.artifacts.fingerprint()
    ));
    if !report.skipped.is_empty() {
        out.push_str(&format!("\nSkipped: {}", report.skipped.join(", ")));
    }
    out
}

/// Display map, per-generator contributions, and fingerprint as pretty JSON.
pub fn format_generation_json(report: &GenerationReport) -> Result<String, GenerationError> {
    let generators: Vec<serde_json::Value> = report
        .contributions
        .iter()
        .map(|c| {
            json!({
                "generator": c.generator,
                "artifact": c.kind,
                "paths": c.paths,
            })
        })
        .collect();

    let value = json!({
        "files": report.artifacts.to_display_map(),
        "generators": generators,
        "skipped": report.skipped,
        "fingerprint": report.artifacts.fingerprint(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn format_validation_text(
    config: &SamplegenConfig,
    result: &Result<(), Vec<ValidationError>>,
) -> String {
    match result {
        Ok(()) => format!(
            "Configuration is valid\n  language: {}\n  artifacts: {}\n  logging: {} ({}, {})",
            config.generation.language,
            config.generation.artifacts.join(", "),
            config.logging.level,
            config.logging.format,
            config.logging.output,
        ),
        Err(errors) => {
            let mut out = format!("Configuration has {} error(s):", errors.len());
            for error in errors {
                out.push_str(&format!("\n  - {}", error));
            }
            out
        }
    }
}
