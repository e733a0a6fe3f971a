//! Relation module - directed labeled edges between entities

use crate::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a relation
///
/// Scoring reads the three built-in labels. Any other label is preserved
/// verbatim so snapshots written by newer pipelines still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationLabel {
    /// Evidence supports a claim
    Supports,
    /// Evidence challenges a claim
    Challenges,
    /// An assumption underlies a claim
    Underlies,
    /// Any other label
    Other(String),
}

impl RelationLabel {
    /// Wire name of the label
    pub fn as_str(&self) -> &str {
        match self {
            RelationLabel::Supports => "SUPPORTS",
            RelationLabel::Challenges => "CHALLENGES",
            RelationLabel::Underlies => "UNDERLIES",
            RelationLabel::Other(label) => label,
        }
    }
}

impl From<&str> for RelationLabel {
    fn from(value: &str) -> Self {
        match value {
            "SUPPORTS" => RelationLabel::Supports,
            "CHALLENGES" => RelationLabel::Challenges,
            "UNDERLIES" => RelationLabel::Underlies,
            other => RelationLabel::Other(other.to_string()),
        }
    }
}

impl From<String> for RelationLabel {
    fn from(value: String) -> Self {
        RelationLabel::from(value.as_str())
    }
}

impl From<RelationLabel> for String {
    fn from(label: RelationLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed `(src, label, dst)` triple
///
/// Serializes as a three-element array. No uniqueness is implied: the graph
/// keeps duplicates and each one counts separately during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "(EntityId, RelationLabel, EntityId)",
    into = "(EntityId, RelationLabel, EntityId)"
)]
pub struct Relation {
    /// Source entity
    pub src: EntityId,
    /// Relation label
    pub label: RelationLabel,
    /// Destination entity
    pub dst: EntityId,
}

impl Relation {
    /// Create a new relation
    pub fn new(src: EntityId, label: RelationLabel, dst: EntityId) -> Self {
        Self { src, label, dst }
    }
}

impl From<(EntityId, RelationLabel, EntityId)> for Relation {
    fn from((src, label, dst): (EntityId, RelationLabel, EntityId)) -> Self {
        Self { src, label, dst }
    }
}

impl From<Relation> for (EntityId, RelationLabel, EntityId) {
    fn from(relation: Relation) -> Self {
        (relation.src, relation.label, relation.dst)
    }
}
