//! Entities stored in the knowledge graph
//!
//! Every entity carries a unique [`EntityId`]. The argumentation entities
//! (sources, claims, evidence, assumptions, arguments) are produced by the
//! ingestion pipeline; the ethics entities are data-only placeholders that
//! round-trip through snapshots but are never reasoned over.

use crate::EntityId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Locator for a passage inside a source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Span identifier
    pub span_id: String,
    /// Page number, if paginated
    #[serde(default)]
    pub page: Option<u32>,
    /// Paragraph index
    #[serde(default)]
    pub paragraph: Option<u32>,
    /// Start character offset
    #[serde(default)]
    pub start_offset: Option<usize>,
    /// End character offset (exclusive)
    #[serde(default)]
    pub end_offset: Option<usize>,
}

impl Span {
    /// Create a span with only an identifier
    pub fn new(span_id: impl Into<String>) -> Self {
        Self {
            span_id: span_id.into(),
            page: None,
            paragraph: None,
            start_offset: None,
            end_offset: None,
        }
    }

    /// Set the character range
    pub fn with_offsets(mut self, start: usize, end: usize) -> Self {
        self.start_offset = Some(start);
        self.end_offset = Some(end);
        self
    }
}

/// A document or other origin of claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Unique identifier
    pub id: EntityId,
    /// Human-readable title
    pub title: String,
    /// Type tag (e.g. "local_document")
    pub source_type: String,
    /// Location of the source
    #[serde(default)]
    pub uri: Option<String>,
    /// Short excerpt or abstract
    #[serde(default)]
    pub summary: Option<String>,
}

impl Source {
    /// Create a new source with a generated id
    pub fn new(title: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate("source"),
            title: title.into(),
            source_type: source_type.into(),
            uri: None,
            summary: None,
        }
    }
}

/// An asserted statement subject to confidence scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: EntityId,
    /// Claim text
    pub text: String,
    /// Source the claim was extracted from
    #[serde(default)]
    pub source_id: Option<EntityId>,
    /// Location inside the source
    #[serde(default)]
    pub span: Option<Span>,
    /// Confidence in [0, 1], written only from scoring output
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Claim {
    /// Create a new claim with a generated id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate("claim"),
            text: text.into(),
            source_id: None,
            span: None,
            confidence: None,
        }
    }

    /// Attach the originating source
    pub fn with_source(mut self, source_id: Option<EntityId>) -> Self {
        self.source_id = source_id;
        self
    }

    /// Attach a span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

/// A text unit that supports or challenges a claim
///
/// `polarity` is informational. The sign used by scoring always comes from
/// the label of the relation linking the evidence to a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Unique identifier
    pub id: EntityId,
    /// Evidence text
    pub text: String,
    /// Free-form type tag looked up in the reliability baselines
    pub evidence_type: String,
    /// Source the evidence came from
    #[serde(default)]
    pub source_id: Option<EntityId>,
    /// Location inside the source
    #[serde(default)]
    pub span: Option<Span>,
    /// Reliability in [0, 1]
    #[serde(default)]
    pub reliability: Option<f64>,
    /// Relevance in [0, 1]
    #[serde(default)]
    pub relevance: Option<f64>,
    /// +1 supporting, -1 challenging
    #[serde(default = "default_polarity")]
    pub polarity: i8,
}

fn default_polarity() -> i8 {
    1
}

impl Evidence {
    /// Create new supporting evidence with a generated id
    pub fn new(text: impl Into<String>, evidence_type: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate("evidence"),
            text: text.into(),
            evidence_type: evidence_type.into(),
            source_id: None,
            span: None,
            reliability: None,
            relevance: None,
            polarity: 1,
        }
    }

    /// Set the informational polarity
    pub fn with_polarity(mut self, polarity: i8) -> Self {
        self.polarity = polarity;
        self
    }

    /// Attach the originating source
    pub fn with_source(mut self, source_id: Option<EntityId>) -> Self {
        self.source_id = source_id;
        self
    }
}

/// An unstated premise underlying a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    /// Unique identifier
    pub id: EntityId,
    /// Assumption text
    pub text: String,
    /// Source the assumption was detected in
    #[serde(default)]
    pub source_id: Option<EntityId>,
    /// Location inside the source
    #[serde(default)]
    pub span: Option<Span>,
    /// Penalty in [0, 1]
    #[serde(default)]
    pub penalty: Option<f64>,
}

impl Assumption {
    /// Create a new assumption with a generated id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: EntityId::generate("assumption"),
            text: text.into(),
            source_id: None,
            span: None,
            penalty: None,
        }
    }

    /// Attach the originating source
    pub fn with_source(mut self, source_id: Option<EntityId>) -> Self {
        self.source_id = source_id;
        self
    }
}

/// A claim bundled with the evidence and assumptions cited for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Unique identifier
    pub id: EntityId,
    /// The claim this argument is about
    pub claim_id: EntityId,
    /// Cited evidence, in order
    #[serde(default)]
    pub evidence_ids: Vec<EntityId>,
    /// Cited assumptions, in order
    #[serde(default)]
    pub assumption_ids: Vec<EntityId>,
    /// Strength in [0, 1]
    #[serde(default)]
    pub strength: Option<f64>,
}

impl Argument {
    /// Create a new argument with a generated id
    pub fn new(
        claim_id: EntityId,
        evidence_ids: Vec<EntityId>,
        assumption_ids: Vec<EntityId>,
    ) -> Self {
        Self {
            id: EntityId::generate("argument"),
            claim_id,
            evidence_ids,
            assumption_ids,
            strength: None,
        }
    }
}

/// A value weighed in an ethical evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    /// Unique identifier
    pub id: EntityId,
    /// Value name
    pub name: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Relative weight
    #[serde(default)]
    pub weight: Option<f64>,
}

/// A hard constraint on decision options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Unique identifier
    pub id: EntityId,
    /// Constraint name
    pub name: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Severity of violation
    #[serde(default)]
    pub severity: Option<f64>,
}

/// One option in a decision under evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    /// Unique identifier
    pub id: EntityId,
    /// Short label
    pub label: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Aggregate score
    #[serde(default)]
    pub score: Option<f64>,
}

/// A named ethical framework and its decision rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalFramework {
    /// Unique identifier
    pub id: EntityId,
    /// Framework name
    pub name: String,
    /// Free-form rule records
    #[serde(default)]
    pub decision_rules: Vec<BTreeMap<String, String>>,
}

/// Evaluation of one option under one framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalEvaluation {
    /// Unique identifier
    pub id: EntityId,
    /// Framework applied
    pub framework_id: EntityId,
    /// Option evaluated
    pub option_id: EntityId,
    /// Resulting score
    #[serde(default)]
    pub score: Option<f64>,
    /// Explanation of the score
    #[serde(default)]
    pub rationale: Option<String>,
}

/// Discriminant for [`Entity`]
///
/// The declaration order is the bucket order of the graph and of snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    /// [`Source`]
    Source,
    /// [`Claim`]
    Claim,
    /// [`Evidence`]
    Evidence,
    /// [`Assumption`]
    Assumption,
    /// [`Argument`]
    Argument,
    /// [`Value`]
    Value,
    /// [`Constraint`]
    Constraint,
    /// [`DecisionOption`]
    DecisionOption,
    /// [`EthicalFramework`]
    EthicalFramework,
    /// [`EthicalEvaluation`]
    EthicalEvaluation,
}

impl EntityKind {
    /// Every kind, in bucket order
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Source,
        EntityKind::Claim,
        EntityKind::Evidence,
        EntityKind::Assumption,
        EntityKind::Argument,
        EntityKind::Value,
        EntityKind::Constraint,
        EntityKind::DecisionOption,
        EntityKind::EthicalFramework,
        EntityKind::EthicalEvaluation,
    ];

    /// Name used as the snapshot key
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Source => "Source",
            EntityKind::Claim => "Claim",
            EntityKind::Evidence => "Evidence",
            EntityKind::Assumption => "Assumption",
            EntityKind::Argument => "Argument",
            EntityKind::Value => "Value",
            EntityKind::Constraint => "Constraint",
            EntityKind::DecisionOption => "DecisionOption",
            EntityKind::EthicalFramework => "EthicalFramework",
            EntityKind::EthicalEvaluation => "EthicalEvaluation",
        }
    }

    /// Parse a snapshot key; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any entity the graph can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A source document
    Source(Source),
    /// A claim
    Claim(Claim),
    /// A piece of evidence
    Evidence(Evidence),
    /// An assumption
    Assumption(Assumption),
    /// An argument
    Argument(Argument),
    /// An ethical value
    Value(Value),
    /// A constraint
    Constraint(Constraint),
    /// A decision option
    DecisionOption(DecisionOption),
    /// An ethical framework
    EthicalFramework(EthicalFramework),
    /// An ethical evaluation
    EthicalEvaluation(EthicalEvaluation),
}

impl Entity {
    /// The entity's id
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Source(e) => &e.id,
            Entity::Claim(e) => &e.id,
            Entity::Evidence(e) => &e.id,
            Entity::Assumption(e) => &e.id,
            Entity::Argument(e) => &e.id,
            Entity::Value(e) => &e.id,
            Entity::Constraint(e) => &e.id,
            Entity::DecisionOption(e) => &e.id,
            Entity::EthicalFramework(e) => &e.id,
            Entity::EthicalEvaluation(e) => &e.id,
        }
    }

    /// The entity's kind
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Source(_) => EntityKind::Source,
            Entity::Claim(_) => EntityKind::Claim,
            Entity::Evidence(_) => EntityKind::Evidence,
            Entity::Assumption(_) => EntityKind::Assumption,
            Entity::Argument(_) => EntityKind::Argument,
            Entity::Value(_) => EntityKind::Value,
            Entity::Constraint(_) => EntityKind::Constraint,
            Entity::DecisionOption(_) => EntityKind::DecisionOption,
            Entity::EthicalFramework(_) => EntityKind::EthicalFramework,
            Entity::EthicalEvaluation(_) => EntityKind::EthicalEvaluation,
        }
    }

    /// Deserialize a record of the given kind using that kind's field set
    pub fn deserialize_as<'de, D>(kind: EntityKind, deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match kind {
            EntityKind::Source => Entity::Source(Source::deserialize(deserializer)?),
            EntityKind::Claim => Entity::Claim(Claim::deserialize(deserializer)?),
            EntityKind::Evidence => Entity::Evidence(Evidence::deserialize(deserializer)?),
            EntityKind::Assumption => Entity::Assumption(Assumption::deserialize(deserializer)?),
            EntityKind::Argument => Entity::Argument(Argument::deserialize(deserializer)?),
            EntityKind::Value => Entity::Value(Value::deserialize(deserializer)?),
            EntityKind::Constraint => Entity::Constraint(Constraint::deserialize(deserializer)?),
            EntityKind::DecisionOption => {
                Entity::DecisionOption(DecisionOption::deserialize(deserializer)?)
            }
            EntityKind::EthicalFramework => {
                Entity::EthicalFramework(EthicalFramework::deserialize(deserializer)?)
            }
            EntityKind::EthicalEvaluation => {
                Entity::EthicalEvaluation(EthicalEvaluation::deserialize(deserializer)?)
            }
        })
    }
}

/// Serializes as the inner record only; the kind travels as the snapshot key.
impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entity::Source(e) => e.serialize(serializer),
            Entity::Claim(e) => e.serialize(serializer),
            Entity::Evidence(e) => e.serialize(serializer),
            Entity::Assumption(e) => e.serialize(serializer),
            Entity::Argument(e) => e.serialize(serializer),
            Entity::Value(e) => e.serialize(serializer),
            Entity::Constraint(e) => e.serialize(serializer),
            Entity::DecisionOption(e) => e.serialize(serializer),
            Entity::EthicalFramework(e) => e.serialize(serializer),
            Entity::EthicalEvaluation(e) => e.serialize(serializer),
        }
    }
}

macro_rules! impl_from_entity {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Entity {
                fn from(value: $variant) -> Self {
                    Entity::$variant(value)
                }
            }
        )*
    };
}

impl_from_entity!(
    Source,
    Claim,
    Evidence,
    Assumption,
    Argument,
    Value,
    Constraint,
    DecisionOption,
    EthicalFramework,
    EthicalEvaluation,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_name("ReasoningStep"), None);
    }

    #[test]
    fn test_entity_kind_and_id() {
        let claim = Claim::new("The sky is blue.");
        let id = claim.id.clone();
        let entity = Entity::from(claim);
        assert_eq!(entity.kind(), EntityKind::Claim);
        assert_eq!(entity.id(), &id);
    }

    #[test]
    fn test_evidence_defaults_to_supporting() {
        let evidence = Evidence::new("Study shows it.", "empirical");
        assert_eq!(evidence.polarity, 1);
        assert_eq!(evidence.with_polarity(-1).polarity, -1);
    }

    #[test]
    fn test_serialize_then_deserialize_as_kind() {
        let claim = Claim::new("Claims carry spans.")
            .with_span(Span::new("span_1").with_offsets(3, 19));
        let entity = Entity::from(claim);

        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["span"]["start_offset"], 3);

        let restored = Entity::deserialize_as(EntityKind::Claim, json).unwrap();
        assert_eq!(restored, entity);
    }

    #[test]
    fn test_deserialize_with_wrong_kind_fails() {
        let json = serde_json::to_value(Entity::from(Claim::new("x"))).unwrap();
        assert!(Entity::deserialize_as(EntityKind::Evidence, json).is_err());
    }

    #[test]
    fn test_missing_polarity_defaults_to_one() {
        let json = serde_json::json!({
            "id": "evidence_1",
            "text": "t",
            "evidence_type": "empirical"
        });
        let entity = Entity::deserialize_as(EntityKind::Evidence, json).unwrap();
        match entity {
            Entity::Evidence(e) => assert_eq!(e.polarity, 1),
            other => panic!("Expected evidence, got {:?}", other),
        }
    }
}
