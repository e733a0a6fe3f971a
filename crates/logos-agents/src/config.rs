//! Configuration for the extraction stages

use serde::{Deserialize, Serialize};

/// Configuration for the extraction stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum claims taken from one document
    #[serde(default = "default_max_claims")]
    pub max_claims: usize,

    /// Characters of document text kept as the source summary
    #[serde(default = "default_summary_len")]
    pub summary_len: usize,
}

fn default_max_claims() -> usize {
    3
}

fn default_summary_len() -> usize {
    200
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_claims: default_max_claims(),
            summary_len: default_summary_len(),
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_claims == 0 {
            return Err("max_claims must be greater than 0".to_string());
        }
        if self.summary_len == 0 {
            return Err("summary_len must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
