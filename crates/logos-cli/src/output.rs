//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use logos_domain::EntityId;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Confidence computed for one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimScore {
    /// Claim id
    pub id: EntityId,
    /// Claim text
    pub text: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format claim confidence scores.
    pub fn format_claim_scores(&self, scores: &[ClaimScore]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(scores)?),
            OutputFormat::Table => Ok(self.format_claim_scores_table(scores)),
            OutputFormat::Quiet => Ok(scores
                .iter()
                .map(|score| score.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_claim_scores_table(&self, scores: &[ClaimScore]) -> String {
        if scores.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Claim ID", "Text", "Confidence"]);
        for score in scores {
            builder.push_record([
                score.id.to_string(),
                score.text.clone(),
                format!("{:.2}", score.confidence),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize("Claim Confidence", "cyan"), table)
    }

    /// Format an argument strength line.
    pub fn argument_strength(&self, argument_id: &EntityId, strength: f64) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "argument_id": argument_id,
                "strength": strength,
            })
            .to_string(),
            OutputFormat::Quiet => argument_id.to_string(),
            OutputFormat::Table => format!("Argument {} strength: {:.2}", argument_id, strength),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether messages other than results should be printed
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet | OutputFormat::Json)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
