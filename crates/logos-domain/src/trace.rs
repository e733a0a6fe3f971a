//! Explanation trace value objects
//!
//! A trace is the auditable record behind one score: the ordered reasoning
//! steps that produced it plus any uncertainty markers raised on the way.
//! Steps are append-only; once pushed they are never edited or reordered.

use crate::EntityId;
use serde::{Deserialize, Serialize};

/// One atomic contribution to a score computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    /// Unique identifier
    pub id: EntityId,
    /// Rule that produced this step
    pub rule_id: String,
    /// Human-readable description
    pub description: String,
    /// Change applied by this step (may be negative)
    pub delta: f64,
    /// Running score after this step
    #[serde(default)]
    pub resulting_score: Option<f64>,
}

impl ReasoningStep {
    /// Create a step with a fresh id
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
        delta: f64,
        resulting_score: Option<f64>,
    ) -> Self {
        Self {
            id: EntityId::generate("step"),
            rule_id: rule_id.into(),
            description: description.into(),
            delta,
            resulting_score,
        }
    }
}

/// A gap or ambiguity found while scoring a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyMarker {
    /// Unique identifier
    pub id: EntityId,
    /// Entity the marker is about
    pub subject_id: EntityId,
    /// Free-text note
    pub note: String,
    /// Severity in [0, 1]
    #[serde(default)]
    pub severity: Option<f64>,
}

impl UncertaintyMarker {
    /// Create a marker with a fresh id
    pub fn new(subject_id: EntityId, note: impl Into<String>, severity: Option<f64>) -> Self {
        Self {
            id: EntityId::generate("uncertainty"),
            subject_id,
            note: note.into(),
            severity,
        }
    }
}

/// Ordered reasoning steps and uncertainty markers for one scored subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationTrace {
    /// Unique identifier
    pub id: EntityId,
    /// Entity the trace explains
    pub subject_id: EntityId,
    /// Steps in emission order
    #[serde(default)]
    pub steps: Vec<ReasoningStep>,
    /// Markers in emission order
    #[serde(default)]
    pub uncertainty_markers: Vec<UncertaintyMarker>,
}

impl ExplanationTrace {
    /// Assemble a trace with a fresh id
    pub fn new(
        subject_id: EntityId,
        steps: Vec<ReasoningStep>,
        uncertainty_markers: Vec<UncertaintyMarker>,
    ) -> Self {
        Self {
            id: EntityId::generate("trace"),
            subject_id,
            steps,
            uncertainty_markers,
        }
    }

    /// Append a step
    pub fn push_step(&mut self, step: ReasoningStep) {
        self.steps.push(step);
    }

    /// Re-point the trace at a different subject, keeping its body
    pub fn retag(&mut self, subject_id: EntityId) {
        self.subject_id = subject_id;
    }

    /// Steps produced by the given rule
    pub fn steps_for_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a ReasoningStep> {
        self.steps.iter().filter(move |step| step.rule_id == rule_id)
    }

    /// Resulting score of the last step that recorded one
    pub fn final_score(&self) -> Option<f64> {
        self.steps.iter().rev().find_map(|step| step.resulting_score)
    }
}
