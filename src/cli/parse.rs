//! CLI parse: clap types for samplegen. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Samplegen CLI - sample import collection and artifact generation
#[derive(Parser)]
#[command(name = "samplegen")]
#[command(about = "Collect sample imports and generate API artifacts from a resolved product")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the selected artifact generators against a product
    Generate {
        /// Resolved product configuration (JSON)
        #[arg(long)]
        product: PathBuf,
        /// Artifact kind to run, repeatable (surface, test, samples)
        #[arg(long = "artifact")]
        artifacts: Vec<String>,
        /// Only run generators declaring this input, repeatable
        #[arg(long = "snippet")]
        snippets: Vec<String>,
        /// Write generated files under this directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Validate the layered configuration
    ValidateConfig,
}
