//! The standard ingestion stages
//!
//! Evidence and assumptions are placeholders: every claim receives one stub
//! supporting evidence item and one methodological assumption so the
//! scoring engine has something to weigh.

use crate::error::AgentError;
use crate::stage::{PipelineContext, Stage, StageReport};
use crate::text::{document_title, extract_claims, summarize};
use logos_domain::{
    Argument, Assumption, Claim, EntityId, EntityKind, Evidence, KnowledgeGraph, Relation,
    RelationLabel, Source, UncertaintyMarker,
};
use tracing::{debug, info, warn};

const SOURCE_TYPE: &str = "local_document";
const STUB_EVIDENCE_TYPE: &str = "empirical";
const STUB_ASSUMPTION: &str = "Methodological assumption: data is representative.";
const MISSING_DOCUMENT_SEVERITY: f64 = 1.0;
const NO_CLAIMS_SEVERITY: f64 = 0.5;

/// Id, source and text of every claim currently in the graph
fn claim_snapshot(graph: &KnowledgeGraph) -> Vec<(EntityId, Option<EntityId>, String)> {
    graph
        .claims()
        .map(|claim| (claim.id.clone(), claim.source_id.clone(), claim.text.clone()))
        .collect()
}

/// Reads the document and records it as a [`Source`]
///
/// A missing file is not an error: it yields empty text, a source with no
/// summary and an uncertainty marker on that source.
#[derive(Debug, Default)]
pub struct DocumentIngestor;

impl Stage for DocumentIngestor {
    fn name(&self) -> &'static str {
        "document_ingestor"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let mut missing = None;
        let text = match &context.document_path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!("Document {} not found, ingesting empty text", path.display());
                    missing = Some(path.display().to_string());
                    String::new()
                }
                Err(source) => {
                    return Err(AgentError::Io {
                        path: path.clone(),
                        source,
                    })
                }
            },
            None => String::new(),
        };

        let title = context
            .document_path
            .as_deref()
            .map(document_title)
            .unwrap_or_else(|| "untitled".to_string());
        let mut source = Source::new(title, SOURCE_TYPE);
        source.uri = context
            .document_path
            .as_ref()
            .map(|path| path.display().to_string());
        source.summary = summarize(&text, context.config.summary_len);

        let source_id = graph.add_entity(source);
        info!(
            "Ingested document as {} ({} chars)",
            source_id,
            text.chars().count()
        );
        let uncertainty_markers = missing
            .map(|path| {
                UncertaintyMarker::new(
                    source_id.clone(),
                    format!("Document {} not found.", path),
                    Some(MISSING_DOCUMENT_SEVERITY),
                )
            })
            .into_iter()
            .collect();
        context.source_id = Some(source_id.clone());
        context.document_text = text;

        Ok(StageReport {
            created_entities: vec![source_id],
            uncertainty_markers,
            ..StageReport::default()
        })
    }
}

/// Extracts candidate claims from the document text
#[derive(Debug, Default)]
pub struct ClaimExtractor;

impl Stage for ClaimExtractor {
    fn name(&self) -> &'static str {
        "claim_extractor"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let mut report = StageReport::default();
        for text in extract_claims(&context.document_text, context.config.max_claims) {
            let claim = Claim::new(text).with_source(context.source_id.clone());
            report.created_entities.push(graph.add_entity(claim));
        }
        debug!("Extracted {} claim(s)", report.created_entities.len());

        if report.created_entities.is_empty() {
            if let Some(source_id) = &context.source_id {
                report.uncertainty_markers.push(UncertaintyMarker::new(
                    source_id.clone(),
                    "No claims found in document.",
                    Some(NO_CLAIMS_SEVERITY),
                ));
            }
        }
        Ok(report)
    }
}

/// Attaches one stub supporting evidence item to every claim
#[derive(Debug, Default)]
pub struct EvidenceMapper;

impl Stage for EvidenceMapper {
    fn name(&self) -> &'static str {
        "evidence_mapper"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        _context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let mut report = StageReport::default();
        for (claim_id, source_id, text) in claim_snapshot(graph) {
            let evidence = Evidence::new(
                format!("Stub evidence for claim: {}", text),
                STUB_EVIDENCE_TYPE,
            )
            .with_source(source_id)
            .with_polarity(1);
            let evidence_id = graph.add_entity(evidence);
            graph.add_relation(evidence_id.clone(), RelationLabel::Supports, claim_id.clone());

            report.relations_added.push(Relation::new(
                evidence_id.clone(),
                RelationLabel::Supports,
                claim_id,
            ));
            report.created_entities.push(evidence_id);
        }
        Ok(report)
    }
}

/// Attaches one methodological assumption to every claim
#[derive(Debug, Default)]
pub struct AssumptionDetector;

impl Stage for AssumptionDetector {
    fn name(&self) -> &'static str {
        "assumption_detector"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        _context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let mut report = StageReport::default();
        for (claim_id, source_id, _) in claim_snapshot(graph) {
            let assumption = Assumption::new(STUB_ASSUMPTION).with_source(source_id);
            let assumption_id = graph.add_entity(assumption);
            graph.add_relation(
                assumption_id.clone(),
                RelationLabel::Underlies,
                claim_id.clone(),
            );

            report.relations_added.push(Relation::new(
                assumption_id.clone(),
                RelationLabel::Underlies,
                claim_id,
            ));
            report.created_entities.push(assumption_id);
        }
        Ok(report)
    }
}

/// Bundles each claim with all evidence and all assumptions into an [`Argument`]
#[derive(Debug, Default)]
pub struct ArgumentBuilder;

impl Stage for ArgumentBuilder {
    fn name(&self) -> &'static str {
        "argument_builder"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        _context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let evidence_ids = graph.ids(EntityKind::Evidence);
        let assumption_ids = graph.ids(EntityKind::Assumption);

        let mut report = StageReport::default();
        for claim_id in graph.ids(EntityKind::Claim) {
            let argument = Argument::new(claim_id, evidence_ids.clone(), assumption_ids.clone());
            report.created_entities.push(graph.add_entity(argument));
        }
        Ok(report)
    }
}

/// Runs graph validation and turns every issue into an auditor note
#[derive(Debug, Default)]
pub struct LogicAuditor;

impl Stage for LogicAuditor {
    fn name(&self) -> &'static str {
        "logic_auditor"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        _context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let issues = graph.validate();
        if !issues.is_empty() {
            warn!("Graph validation found {} issue(s)", issues.len());
        }
        Ok(StageReport {
            auditor_notes: issues.iter().map(ToString::to_string).collect(),
            ..StageReport::default()
        })
    }
}

/// Summarizes what the pipeline produced
#[derive(Debug, Default)]
pub struct ExplanationComposer;

impl Stage for ExplanationComposer {
    fn name(&self) -> &'static str {
        "explanation_composer"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        _context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        let note = format!(
            "Composed explanation with {} claims and {} evidence items.",
            graph.count(EntityKind::Claim),
            graph.count(EntityKind::Evidence)
        );
        Ok(StageReport {
            auditor_notes: vec![note],
            ..StageReport::default()
        })
    }
}
