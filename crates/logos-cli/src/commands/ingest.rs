//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;
use logos_agents::{Orchestrator, PipelineContext, Stage, StageReport};
use logos_domain::{EntityId, KnowledgeGraph};
use logos_store::{save_graph, AuditEvent, AuditLog, SqliteIndex};
use std::path::Path;
use tracing::{debug, warn};

/// Graph and report produced by one pipeline run
#[derive(Debug)]
pub struct Ingestion {
    /// Populated graph
    pub graph: KnowledgeGraph,
    /// Source created for the document
    pub source_id: Option<EntityId>,
    /// Merged stage report
    pub report: StageReport,
}

/// Run the standard pipeline over the document at `path`
pub fn run_pipeline(path: &Path, settings: &Settings) -> Result<Ingestion> {
    let mut graph = KnowledgeGraph::new();
    let mut context = PipelineContext::for_document(path, settings.extraction.clone());
    let report = Orchestrator::standard().run(&mut graph, &mut context)?;
    for note in &report.auditor_notes {
        debug!("Auditor note: {}", note);
    }
    for marker in &report.uncertainty_markers {
        warn!("Uncertain {}: {}", marker.subject_id, marker.note);
    }
    Ok(Ingestion {
        graph,
        source_id: context.source_id,
        report,
    })
}

/// Save a snapshot and record it in the audit log
pub(crate) fn save_snapshot(graph: &KnowledgeGraph, path: &Path, settings: &Settings) -> Result<()> {
    save_graph(graph, path)?;
    AuditLog::new(settings.audit_log_path()).append(AuditEvent::GraphSnapshot {
        path: path.to_path_buf(),
    })?;
    Ok(())
}

/// Execute the ingest command.
pub fn execute_ingest(
    args: IngestArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<Ingestion> {
    settings.ensure_dirs()?;
    let ingestion = run_pipeline(&args.path, settings)?;

    let mut index = SqliteIndex::open(settings.index_path())?;
    index.index_graph(&ingestion.graph)?;
    debug!("Index now holds {} entities", index.entity_count()?);

    if let Some(save) = &args.save {
        save_snapshot(&ingestion.graph, save, settings)?;
    }

    let source_id = ingestion
        .source_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    if formatter.is_quiet() {
        println!("{}", source_id);
    } else {
        println!("{}", formatter.success(&format!("Ingested source {}", source_id)));
    }
    Ok(ingestion)
}
