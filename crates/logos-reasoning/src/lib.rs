//! Logos Reasoning
//!
//! Rule-based scoring over a [`KnowledgeGraph`](logos_domain::KnowledgeGraph).
//!
//! # Overview
//!
//! A [`Rulebook`] supplies reliability baselines, relevance rules,
//! assumption penalties and numeric constants. The scoring functions read a
//! populated graph plus the rulebook and return a score together with an
//! [`ExplanationTrace`](logos_domain::ExplanationTrace) recording every step
//! that produced it. A [`TraceLogger`] collects traces over a run and exports
//! them as JSON files.
//!
//! ```text
//! Graph + Rulebook → scoring → (score, trace) → TraceLogger → trace_*.json
//! ```
//!
//! # Example
//!
//! ```
//! use logos_domain::{Claim, Evidence, KnowledgeGraph, RelationLabel};
//! use logos_reasoning::{compute_claim_confidence, Rulebook};
//!
//! let rulebook = Rulebook::default_rules().unwrap();
//! let mut graph = KnowledgeGraph::new();
//! let claim = graph.add_entity(Claim::new("The bridge is safe."));
//! let evidence = graph.add_entity(Evidence::new("Load tests show the bridge is safe.", "empirical"));
//! graph.add_relation(evidence, RelationLabel::Supports, claim.clone());
//!
//! let (score, trace) = compute_claim_confidence(&claim, &graph, &rulebook).unwrap();
//! assert!(score > 0.0 && score <= 1.0);
//! assert_eq!(trace.subject_id, claim);
//! ```

#![warn(missing_docs)]

mod error;
mod rulebook;
pub mod rules;
mod scoring;
mod trace_log;

pub use error::{RulebookError, ScoringError, TraceExportError};
pub use rulebook::{Constants, RelevanceRule, Rulebook, DEFAULT_RULES_TOML};
pub use scoring::{
    compute_argument_strength, compute_claim_confidence, score_evidence_relevance,
    score_evidence_reliability, ScoreBreakdown,
};
pub use trace_log::TraceLogger;
