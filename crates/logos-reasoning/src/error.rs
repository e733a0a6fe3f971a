//! Error types for rulebook loading, scoring and trace export

use logos_domain::EntityId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a rulebook
#[derive(Error, Debug)]
pub enum RulebookError {
    /// Failed to read the rulebook file
    #[error("Failed to read rulebook {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The document is not valid TOML or a section has the wrong shape
    #[error("Failed to parse rulebook: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more required top-level sections are absent
    #[error("Missing keys in rulebook: {0:?}")]
    MissingSections(Vec<String>),

    /// A baseline or penalty lies outside [0, 1]
    #[error("Rulebook value {section}.{key} = {value} is outside [0.0, 1.0]")]
    OutOfRange {
        /// Section holding the value
        section: &'static str,
        /// Entry key
        key: String,
        /// Offending value
        value: f64,
    },

    /// A constant is NaN or infinite
    #[error("Rulebook constant {key} = {value} is not finite")]
    NonFiniteConstant {
        /// Constant name
        key: String,
        /// Offending value
        value: f64,
    },
}

/// Errors raised by the scoring functions
#[derive(Error, Debug, PartialEq)]
pub enum ScoringError {
    /// No claim with this id exists in the graph
    #[error("Claim {0} not found")]
    ClaimNotFound(EntityId),

    /// No argument with this id exists in the graph
    #[error("Argument {0} not found")]
    ArgumentNotFound(EntityId),
}

/// Errors raised while exporting traces
#[derive(Error, Debug)]
pub enum TraceExportError {
    /// Filesystem error
    #[error("I/O error writing {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
