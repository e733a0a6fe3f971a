//! Evaluate-argument command implementation.

use crate::cli::EvaluateArgs;
use crate::commands::ingest::{run_pipeline, save_snapshot};
use crate::config::Settings;
use crate::error::Result;
use crate::output::{ClaimScore, Formatter};
use logos_domain::{Entity, EntityId, EntityKind, KnowledgeGraph};
use logos_reasoning::{compute_argument_strength, compute_claim_confidence, Rulebook, TraceLogger};
use logos_store::{AuditEvent, AuditLog};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Everything an evaluation produced
#[derive(Debug)]
pub struct Evaluation {
    /// Graph with scores written back
    pub graph: KnowledgeGraph,
    /// Confidence per claim, in claim order
    pub claim_scores: Vec<ClaimScore>,
    /// First argument and its strength, if the graph has one
    pub argument: Option<(EntityId, f64)>,
    /// Exported trace files
    pub exported: Vec<PathBuf>,
}

/// Load the rulebook from `explicit`, else from the configured path
///
/// A missing configured rulebook falls back to the bundled defaults. An
/// explicit path that does not exist is an error.
pub fn load_rulebook(explicit: Option<&Path>, settings: &Settings) -> Result<Rulebook> {
    if let Some(path) = explicit {
        return Ok(Rulebook::from_path(path)?);
    }
    let path = settings.rules_path();
    if path.exists() {
        Ok(Rulebook::from_path(&path)?)
    } else {
        warn!(
            "No rulebook at {}, using bundled defaults (run `logos init` to write one)",
            path.display()
        );
        Ok(Rulebook::default_rules()?)
    }
}

/// Execute the evaluate-argument command.
///
/// Scores every claim, then the first argument, writes the scores back into
/// the graph, exports all traces and appends one audit record per file.
pub fn execute_evaluate_argument(
    args: EvaluateArgs,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<Evaluation> {
    settings.ensure_dirs()?;
    let mut graph = run_pipeline(&args.path, settings)?.graph;
    let rulebook = load_rulebook(args.rules.as_deref(), settings)?;
    let mut logger = TraceLogger::new(settings.traces_dir());

    let claims: Vec<(EntityId, String)> = graph
        .claims()
        .map(|claim| (claim.id.clone(), claim.text.clone()))
        .collect();
    let mut claim_scores = Vec::with_capacity(claims.len());
    for (id, text) in claims {
        let (confidence, trace) = compute_claim_confidence(&id, &graph, &rulebook)?;
        logger.add_trace(trace);
        claim_scores.push(ClaimScore {
            id,
            text,
            confidence,
        });
    }
    for score in &claim_scores {
        if let Some(Entity::Claim(claim)) = graph.get_entity_mut(&score.id) {
            claim.confidence = Some(score.confidence);
        }
    }
    println!("{}", formatter.format_claim_scores(&claim_scores)?);

    let argument = match graph.ids(EntityKind::Argument).into_iter().next() {
        Some(argument_id) => {
            let (strength, trace) = compute_argument_strength(&argument_id, &graph, &rulebook)?;
            logger.add_trace(trace);
            if let Some(Entity::Argument(argument)) = graph.get_entity_mut(&argument_id) {
                argument.strength = Some(strength);
            }
            println!("{}", formatter.argument_strength(&argument_id, strength));
            Some((argument_id, strength))
        }
        None => None,
    };

    let exported = logger.export()?;
    let audit = AuditLog::new(settings.audit_log_path());
    for (path, trace) in exported.iter().zip(logger.traces()) {
        audit.append(AuditEvent::TraceExport {
            path: path.clone(),
            subject_id: trace.subject_id.clone(),
        })?;
    }
    if let Some(first) = exported.first() {
        if !formatter.is_quiet() {
            println!(
                "{}",
                formatter.info(&format!("Trace saved to {}", first.display()))
            );
        }
    }

    if let Some(save) = &args.save {
        save_snapshot(&graph, save, settings)?;
    }

    Ok(Evaluation {
        graph,
        claim_scores,
        argument,
        exported,
    })
}
