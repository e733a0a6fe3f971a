//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rulebook could not be loaded
    #[error("{0}")]
    Rulebook(#[from] logos_reasoning::RulebookError),

    /// Scoring failed for a claim or argument
    #[error("Scoring error: {0}")]
    Scoring(#[from] logos_reasoning::ScoringError),

    /// Traces could not be exported
    #[error("Trace export error: {0}")]
    TraceExport(#[from] logos_reasoning::TraceExportError),

    /// Snapshot, index or audit log error
    #[error("Store error: {0}")]
    Store(#[from] logos_store::StoreError),

    /// Ingestion pipeline error
    #[error("Pipeline error: {0}")]
    Agent(#[from] logos_agents::AgentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
