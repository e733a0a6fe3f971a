//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use logos_agents::ExtractionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "logos.toml";

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root for documents, synthetic cases and the SQLite index
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Root for reasoning traces and the audit log
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,

    /// Directory holding `rules.toml`
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Extraction stage limits
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Settings {
    /// Load settings
    ///
    /// An explicit path must exist. Without one, `logos.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml(&contents)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.extraction.validate().map_err(CliError::Config)?;
        Ok(settings)
    }

    /// Serialize settings to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize settings: {}", e)))
    }

    /// Create the expected local directories if they do not exist
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            self.documents_dir(),
            self.synthetic_cases_dir(),
            self.traces_dir(),
        ] {
            fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// `<data_dir>/documents`
    pub fn documents_dir(&self) -> PathBuf {
        self.data_dir.join("documents")
    }

    /// `<data_dir>/synthetic_cases`
    pub fn synthetic_cases_dir(&self) -> PathBuf {
        self.data_dir.join("synthetic_cases")
    }

    /// `<data_dir>/index.sqlite`
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join("index.sqlite")
    }

    /// `<logs_dir>/reasoning_traces`
    pub fn traces_dir(&self) -> PathBuf {
        self.logs_dir.join("reasoning_traces")
    }

    /// `<logs_dir>/audit_log.jsonl`
    pub fn audit_log_path(&self) -> PathBuf {
        self.logs_dir.join("audit_log.jsonl")
    }

    /// `<config_dir>/rules.toml`
    pub fn rules_path(&self) -> PathBuf {
        self.config_dir.join("rules.toml")
    }

    /// Settings rooted at `root` instead of the working directory
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_dir: root.join(default_data_dir()),
            logs_dir: root.join(default_logs_dir()),
            config_dir: root.join(default_config_dir()),
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            logs_dir: default_logs_dir(),
            config_dir: default_config_dir(),
            output: OutputSettings::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
