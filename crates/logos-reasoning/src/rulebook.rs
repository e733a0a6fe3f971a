//! Scoring rulebook
//!
//! The rulebook is loaded once from TOML and never mutated afterwards.
//! Accessors hand out owned copies so no caller can alter shared state.

use crate::error::RulebookError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Rulebook shipped with the crate, written to `config/rules.toml` by `logos init`
pub const DEFAULT_RULES_TOML: &str = include_str!("../rules/default.toml");

const REQUIRED_SECTIONS: [&str; 4] = [
    "evidence_reliability_baselines",
    "relevance_rules",
    "assumption_penalties",
    "constants",
];

const UNKNOWN_TYPE: &str = "unknown";
const DEFAULT_CATEGORY: &str = "default";
const FALLBACK_RELIABILITY: f64 = 0.5;
const FALLBACK_PENALTY: f64 = 0.1;

/// A conditional relevance adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceRule {
    /// Rule id; only ids the scoring engine knows have any effect
    pub id: String,
    /// Description copied onto the reasoning step
    #[serde(default)]
    pub description: String,
    /// Amount added to relevance when the rule fires
    #[serde(default)]
    pub adjustment: f64,
}

/// Named numeric constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    /// Smoothing term in the net-confidence denominator
    #[serde(default = "default_k")]
    pub k: f64,
    /// Starting relevance for every evidence item
    #[serde(default = "default_relevance_baseline")]
    pub relevance_baseline: f64,
    /// Upper bound on the total assumption penalty
    #[serde(default = "default_penalty_cap")]
    pub penalty_cap: f64,
    /// Any further constants, kept for forward compatibility
    #[serde(flatten)]
    pub extra: BTreeMap<String, f64>,
}

fn default_k() -> f64 {
    0.5
}

fn default_relevance_baseline() -> f64 {
    0.5
}

fn default_penalty_cap() -> f64 {
    0.4
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            k: default_k(),
            relevance_baseline: default_relevance_baseline(),
            penalty_cap: default_penalty_cap(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RulebookDocument {
    evidence_reliability_baselines: BTreeMap<String, f64>,
    relevance_rules: Vec<RelevanceRule>,
    assumption_penalties: BTreeMap<String, f64>,
    constants: Constants,
}

/// Immutable scoring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Rulebook {
    reliability_baselines: BTreeMap<String, f64>,
    relevance_rules: Vec<RelevanceRule>,
    assumption_penalties: BTreeMap<String, f64>,
    constants: Constants,
}

impl Rulebook {
    /// Load a rulebook from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RulebookError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RulebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rulebook = Self::from_toml_str(&contents)?;
        info!(
            "Loaded rulebook from {}: {} baselines, {} relevance rules, {} penalty categories",
            path.display(),
            rulebook.reliability_baselines.len(),
            rulebook.relevance_rules.len(),
            rulebook.assumption_penalties.len()
        );
        Ok(rulebook)
    }

    /// Parse a rulebook from TOML text
    ///
    /// All four sections must be present; every missing one is reported.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RulebookError> {
        let table: toml::Table = toml_str.parse()?;

        let missing: Vec<String> = REQUIRED_SECTIONS
            .iter()
            .filter(|section| !table.contains_key(**section))
            .map(|section| section.to_string())
            .collect();
        if !missing.is_empty() {
            let mut missing = missing;
            missing.sort();
            return Err(RulebookError::MissingSections(missing));
        }

        let document: RulebookDocument = toml::Value::Table(table).try_into()?;
        check_unit_range("evidence_reliability_baselines", &document.evidence_reliability_baselines)?;
        check_unit_range("assumption_penalties", &document.assumption_penalties)?;
        check_finite_constants(&document.constants)?;

        Ok(Self {
            reliability_baselines: document.evidence_reliability_baselines,
            relevance_rules: document.relevance_rules,
            assumption_penalties: document.assumption_penalties,
            constants: document.constants,
        })
    }

    /// The rulebook bundled with this crate
    pub fn default_rules() -> Result<Self, RulebookError> {
        Self::from_toml_str(DEFAULT_RULES_TOML)
    }

    /// Copy of the evidence-type baseline table
    pub fn reliability_baselines(&self) -> BTreeMap<String, f64> {
        self.reliability_baselines.clone()
    }

    /// Whether `evidence_type` has its own baseline
    pub fn has_reliability_baseline(&self, evidence_type: &str) -> bool {
        self.reliability_baselines.contains_key(evidence_type)
    }

    /// Baseline for `evidence_type`, falling back to the `unknown` entry
    pub fn reliability_baseline(&self, evidence_type: &str) -> f64 {
        self.reliability_baselines
            .get(evidence_type)
            .or_else(|| self.reliability_baselines.get(UNKNOWN_TYPE))
            .copied()
            .unwrap_or(FALLBACK_RELIABILITY)
    }

    /// Copy of the relevance rules in rulebook order
    pub fn relevance_rules(&self) -> Vec<RelevanceRule> {
        self.relevance_rules.clone()
    }

    /// Copy of the penalty table
    pub fn assumption_penalties(&self) -> BTreeMap<String, f64> {
        self.assumption_penalties.clone()
    }

    /// Penalty for `category`, falling back to the `default` entry
    pub fn assumption_penalty(&self, category: &str) -> f64 {
        self.assumption_penalties
            .get(category)
            .or_else(|| self.assumption_penalties.get(DEFAULT_CATEGORY))
            .copied()
            .unwrap_or(FALLBACK_PENALTY)
    }

    /// Copy of the constants
    pub fn constants(&self) -> Constants {
        self.constants.clone()
    }
}

fn check_unit_range(
    section: &'static str,
    values: &BTreeMap<String, f64>,
) -> Result<(), RulebookError> {
    match values.iter().find(|(_, value)| !(0.0..=1.0).contains(*value)) {
        Some((key, value)) => Err(RulebookError::OutOfRange {
            section,
            key: key.clone(),
            value: *value,
        }),
        None => Ok(()),
    }
}

fn check_finite_constants(constants: &Constants) -> Result<(), RulebookError> {
    let named = [
        ("k", constants.k),
        ("relevance_baseline", constants.relevance_baseline),
        ("penalty_cap", constants.penalty_cap),
    ];
    let extra = constants.extra.iter().map(|(key, value)| (key.as_str(), *value));
    match named.into_iter().chain(extra).find(|(_, value)| !value.is_finite()) {
        Some((key, value)) => Err(RulebookError::NonFiniteConstant {
            key: key.to_string(),
            value,
        }),
        None => Ok(()),
    }
}
