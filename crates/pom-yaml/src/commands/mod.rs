//! Command implementations for the pom-yaml CLI
//!
//! Each command module handles the CLI interface and delegates to
//! pom-reader for the actual transformation.

use std::path::Path;

use anyhow::{Context, Result};
use pom_model::ProjectDescriptor;
use pom_reader::{ModelParser, ReaderOptions, YamlModelParser};
use tracing::debug;

pub mod check;
pub mod convert;

/// Locate and parse the descriptor at `path`.
pub fn load(path: &Path, options: &ReaderOptions) -> Result<ProjectDescriptor> {
    let parser = YamlModelParser;
    let source = parser
        .locate(path)
        .with_context(|| format!("No pom.yaml found at {}", path.display()))?;
    debug!(location = %source.location(), "parsing descriptor");

    Ok(parser.parse(&source, options)?)
}
