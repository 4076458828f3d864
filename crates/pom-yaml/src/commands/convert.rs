//! Convert command implementation.
//!
//! Reads a `pom.yaml` descriptor and writes it as canonical POM XML, or as JSON
//! for inspection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use pom_model::{ProjectDescriptor, write_pom};
use pom_reader::ReaderOptions;
use tracing::info;

/// Output format for the convert command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Maven POM XML
    Xml,
    /// The descriptor as JSON
    Json,
}

/// Arguments for the convert command
#[derive(Debug)]
pub struct ConvertArgs {
    /// Descriptor file or directory
    pub path: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Output file path (stdout when absent)
    pub output: Option<PathBuf>,
    /// Nesting bound for configuration blocks
    pub max_depth: usize,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> Result<()> {
    let options = ReaderOptions::default().with_max_depth(args.max_depth);
    let project = super::load(&args.path, &options)?;
    let rendered = render(&project, args.format)?;

    match &args.output {
        Some(output) => {
            std::fs::write(output, rendered)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Serialize a descriptor in the requested format, newline terminated.
pub fn render(project: &ProjectDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Xml => write_pom(project).context("Failed to write POM XML"),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(project)?;
            json.push('\n');
            Ok(json)
        }
    }
}
