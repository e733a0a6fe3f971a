//! Stage trait and the values passed between stages

use crate::config::ExtractionConfig;
use crate::error::AgentError;
use logos_domain::{EntityId, KnowledgeGraph, Relation, UncertaintyMarker};
use std::path::PathBuf;

/// Mutable state shared by the stages of one pipeline run
///
/// Earlier stages fill in fields that later stages read: the ingestor sets
/// `document_text` and `source_id`, which the claim extractor consumes.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    /// Document to ingest
    pub document_path: Option<PathBuf>,
    /// Full text of the ingested document
    pub document_text: String,
    /// Source entity created for the document
    pub source_id: Option<EntityId>,
    /// Extraction limits
    pub config: ExtractionConfig,
}

impl PipelineContext {
    /// Context for ingesting the document at `path`
    pub fn for_document(path: impl Into<PathBuf>, config: ExtractionConfig) -> Self {
        Self {
            document_path: Some(path.into()),
            config,
            ..Self::default()
        }
    }
}

/// What a stage did to the graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    /// Ids of entities the stage added
    pub created_entities: Vec<EntityId>,
    /// Relations the stage added
    pub relations_added: Vec<Relation>,
    /// Gaps the stage could not fill, e.g. a missing document
    pub uncertainty_markers: Vec<UncertaintyMarker>,
    /// Free-text notes for a human reviewer
    pub auditor_notes: Vec<String>,
}

impl StageReport {
    /// Append every list of `other` onto this report, preserving order
    pub fn merge(&mut self, other: StageReport) {
        self.created_entities.extend(other.created_entities);
        self.relations_added.extend(other.relations_added);
        self.uncertainty_markers.extend(other.uncertainty_markers);
        self.auditor_notes.extend(other.auditor_notes);
    }
}

/// One step of the ingestion pipeline
pub trait Stage {
    /// Stable stage name used in logs
    fn name(&self) -> &'static str;

    /// Run the stage against the graph
    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError>;
}
