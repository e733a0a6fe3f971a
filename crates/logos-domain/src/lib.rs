//! Logos Domain Layer
//!
//! This crate contains the argumentation model that every other Logos crate
//! builds on. It defines the entities extracted from documents, the labeled
//! relations between them, the in-memory knowledge graph, and the value
//! objects that make up an explanation trace.
//!
//! ## Key Concepts
//!
//! - **Claim**: an asserted statement whose confidence is scored, never stored as fact
//! - **Evidence**: text that supports or challenges a claim through a relation
//! - **Assumption**: an unstated premise that underlies a claim
//! - **Argument**: a claim bundled with the evidence and assumptions cited for it
//! - **Explanation trace**: the ordered reasoning steps behind one score
//!
//! ## Architecture
//!
//! - Pure data and graph bookkeeping, no I/O
//! - Scoring lives in `logos-reasoning`, persistence in `logos-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod graph;
pub mod id;
pub mod relation;
pub mod trace;

// Re-exports for convenience
pub use entity::{
    Argument, Assumption, Claim, Constraint, DecisionOption, Entity, EntityKind,
    EthicalEvaluation, EthicalFramework, Evidence, Source, Span, Value,
};
pub use graph::{IntegrityIssue, KnowledgeGraph, RelationQuery};
pub use id::EntityId;
pub use relation::{Relation, RelationLabel};
pub use trace::{ExplanationTrace, ReasoningStep, UncertaintyMarker};
