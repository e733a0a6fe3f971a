//! Logos Agents
//!
//! The ingestion pipeline that populates a knowledge graph before scoring.
//!
//! # Architecture
//!
//! ```text
//! Document → DocumentIngestor → ClaimExtractor → EvidenceMapper
//!          → AssumptionDetector → ArgumentBuilder → LogicAuditor
//!          → ExplanationComposer → KnowledgeGraph + StageReport
//! ```
//!
//! Each stage implements [`Stage`]. The [`Orchestrator`] owns an ordered
//! list of stages, runs them against one graph and one [`PipelineContext`],
//! and merges their [`StageReport`]s.
//!
//! # Example Usage
//!
//! ```no_run
//! use logos_agents::{ExtractionConfig, Orchestrator, PipelineContext, Stage};
//! use logos_domain::KnowledgeGraph;
//!
//! let mut graph = KnowledgeGraph::new();
//! let mut context = PipelineContext::for_document("data/documents/memo.txt", ExtractionConfig::default());
//! let report = Orchestrator::standard().run(&mut graph, &mut context).unwrap();
//!
//! for note in &report.auditor_notes {
//!     println!("{}", note);
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod stage;
pub mod stages;
pub mod text;

pub use config::ExtractionConfig;
pub use error::AgentError;
pub use orchestrator::Orchestrator;
pub use stage::{PipelineContext, Stage, StageReport};
