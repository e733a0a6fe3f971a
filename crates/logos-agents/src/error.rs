//! Error types for the ingestion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running pipeline stages
#[derive(Error, Debug)]
pub enum AgentError {
    /// The document exists but could not be read
    #[error("Failed to read document {path}: {source}")]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Invalid extraction configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
