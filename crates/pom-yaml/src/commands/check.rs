//! Check command implementation

use std::path::PathBuf;

use anyhow::Result;
use pom_reader::ReaderOptions;
use tracing::info;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    /// Descriptor file or directory
    pub path: PathBuf,
    /// Nesting bound for configuration blocks
    pub max_depth: usize,
}

/// Execute the check command
pub fn execute(args: CheckArgs) -> Result<()> {
    let options = ReaderOptions::default().with_max_depth(args.max_depth);
    let project = super::load(&args.path, &options)?;

    info!(
        dependencies = project.dependencies.len(),
        plugins = project.build.as_ref().map_or(0, |build| build.plugins.len()),
        "descriptor is valid"
    );
    println!("{}: ok", args.path.display());
    Ok(())
}
