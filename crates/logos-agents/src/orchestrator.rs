//! Ordered execution of pipeline stages

use crate::error::AgentError;
use crate::stage::{PipelineContext, Stage, StageReport};
use crate::stages::{
    ArgumentBuilder, AssumptionDetector, ClaimExtractor, DocumentIngestor, EvidenceMapper,
    ExplanationComposer, LogicAuditor,
};
use logos_domain::KnowledgeGraph;
use tracing::{debug, info};

/// Runs a fixed list of stages in order and merges their reports
///
/// The stage list is built once and owned by the orchestrator. A stage
/// failure stops the run; stages already run keep their graph changes.
pub struct Orchestrator {
    stages: Vec<Box<dyn Stage>>,
}

impl Orchestrator {
    /// Orchestrator over a caller-supplied stage list
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The standard seven-stage ingestion pipeline
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DocumentIngestor),
            Box::new(ClaimExtractor),
            Box::new(EvidenceMapper),
            Box::new(AssumptionDetector),
            Box::new(ArgumentBuilder),
            Box::new(LogicAuditor),
            Box::new(ExplanationComposer),
        ])
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

impl Stage for Orchestrator {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    fn run(
        &self,
        graph: &mut KnowledgeGraph,
        context: &mut PipelineContext,
    ) -> Result<StageReport, AgentError> {
        context.config.validate().map_err(AgentError::Config)?;

        let mut report = StageReport::default();
        for stage in &self.stages {
            let stage_report = stage.run(graph, context)?;
            debug!(
                "Stage {} created {} entities and {} relations",
                stage.name(),
                stage_report.created_entities.len(),
                stage_report.relations_added.len()
            );
            report.merge(stage_report);
        }

        info!(
            "Pipeline finished: {} entities created, {} relations added, {} auditor notes",
            report.created_entities.len(),
            report.relations_added.len(),
            report.auditor_notes.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use logos_domain::EntityId;

    struct Marker(&'static str);

    impl Stage for Marker {
        fn name(&self) -> &'static str {
            self.0
        }

        fn run(
            &self,
            _graph: &mut KnowledgeGraph,
            _context: &mut PipelineContext,
        ) -> Result<StageReport, AgentError> {
            Ok(StageReport {
                created_entities: vec![EntityId::from(self.0)],
                ..StageReport::default()
            })
        }
    }

    struct Failing;

    impl Stage for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn run(
            &self,
            _graph: &mut KnowledgeGraph,
            _context: &mut PipelineContext,
        ) -> Result<StageReport, AgentError> {
            Err(AgentError::Config("boom".to_string()))
        }
    }

    #[test]
    fn test_standard_stage_order() {
        assert_eq!(
            Orchestrator::standard().stage_names(),
            vec![
                "document_ingestor",
                "claim_extractor",
                "evidence_mapper",
                "assumption_detector",
                "argument_builder",
                "logic_auditor",
                "explanation_composer",
            ]
        );
    }

    #[test]
    fn test_reports_merge_in_stage_order() {
        let orchestrator = Orchestrator::new(vec![Box::new(Marker("a")), Box::new(Marker("b"))]);
        let report = orchestrator
            .run(&mut KnowledgeGraph::new(), &mut PipelineContext::default())
            .unwrap();
        assert_eq!(
            report.created_entities,
            vec![EntityId::from("a"), EntityId::from("b")]
        );
    }

    #[test]
    fn test_failure_stops_the_run() {
        let orchestrator = Orchestrator::new(vec![Box::new(Failing), Box::new(Marker("never"))]);
        let result = orchestrator.run(&mut KnowledgeGraph::new(), &mut PipelineContext::default());
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut context = PipelineContext {
            config: ExtractionConfig {
                max_claims: 0,
                ..ExtractionConfig::default()
            },
            ..PipelineContext::default()
        };
        let result = Orchestrator::standard().run(&mut KnowledgeGraph::new(), &mut context);
        assert!(matches!(result, Err(AgentError::Config(_))));
    }
}
