//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Logos - argument analysis with traceable confidence scores.
#[derive(Debug, Parser)]
#[command(name = "logos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (defaults to ./logos.toml when present)
    #[arg(short, long, global = true, env = "LOGOS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the data, logs and config layout
    Init,

    /// Run the ingestion pipeline over a document
    Ingest(IngestArgs),

    /// Ingest a document and score its claims and first argument
    EvaluateArgument(EvaluateArgs),

    /// Evaluate an ethics scenario (not implemented yet)
    EvaluateEthics(EthicsArgs),
}

/// Arguments for the ingest command.
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Document to ingest
    pub path: PathBuf,

    /// Write the resulting graph snapshot to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for the evaluate-argument command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Document to ingest and evaluate
    pub path: PathBuf,

    /// Rulebook to use instead of <config_dir>/rules.toml
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Write the scored graph snapshot to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for the evaluate-ethics command.
#[derive(Debug, Parser)]
pub struct EthicsArgs {
    /// Scenario file
    pub scenario_file: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
