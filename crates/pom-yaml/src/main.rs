//! pom-yaml CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pom_reader::DEFAULT_MAX_DEPTH;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::convert::OutputFormat;

mod commands;

#[derive(Parser)]
#[command(name = "pom-yaml")]
#[command(version)]
#[command(about = "Convert pom.yaml project descriptors to Maven POM XML", long_about = None)]
struct Cli {
    /// Show debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a descriptor to POM XML or JSON
    Convert {
        /// Descriptor file, or a directory containing pom.yaml
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Xml)]
        format: OutputFormat,

        /// Write output to FILE instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Deepest nesting accepted inside configuration blocks
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Check that a descriptor parses
    Check {
        /// Descriptor file, or a directory containing pom.yaml
        path: PathBuf,

        /// Deepest nesting accepted inside configuration blocks
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose {
        "pom_yaml=debug,pom_reader=debug"
    } else {
        "pom_yaml=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            path,
            format,
            output,
            max_depth,
        } => commands::convert::execute(commands::convert::ConvertArgs {
            path,
            format,
            output,
            max_depth,
        }),
        Commands::Check { path, max_depth } => {
            commands::check::execute(commands::check::CheckArgs { path, max_depth })
        }
    }
}
