//! JSON graph snapshots
//!
//! Layout:
//!
//! ```json
//! {
//!   "entities": { "Claim": [ { "id": "claim_...", "text": "..." } ] },
//!   "relations": [ ["evidence_...", "SUPPORTS", "claim_..."] ]
//! }
//! ```
//!
//! Within a kind, records keep graph insertion order; relations keep their
//! original order.

use crate::error::StoreError;
use logos_domain::{Entity, EntityKind, KnowledgeGraph, Relation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    entities: BTreeMap<&'static str, Vec<&'a Entity>>,
    relations: &'a [Relation],
}

#[derive(Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    entities: BTreeMap<String, Vec<serde_json::Value>>,
    #[serde(default)]
    relations: Vec<Relation>,
}

/// Encode a graph as a snapshot document
pub fn graph_to_json(graph: &KnowledgeGraph) -> Result<serde_json::Value, StoreError> {
    let entities: BTreeMap<&'static str, Vec<&Entity>> = graph
        .kinds()
        .map(|kind| (kind.as_str(), graph.entities(kind).collect::<Vec<_>>()))
        .collect();
    let snapshot = SnapshotRef {
        entities,
        relations: graph.relations(),
    };
    Ok(serde_json::to_value(snapshot)?)
}

/// Decode a snapshot document into a fresh graph
///
/// Kind names this build does not know are skipped with a warning.
pub fn graph_from_json(value: serde_json::Value) -> Result<KnowledgeGraph, StoreError> {
    let document: SnapshotDocument = serde_json::from_value(value)?;
    let mut graph = KnowledgeGraph::new();

    for (name, records) in document.entities {
        let Some(kind) = EntityKind::from_name(&name) else {
            warn!(
                "Skipping {} record(s) of unknown entity kind '{}'",
                records.len(),
                name
            );
            continue;
        };
        for record in records {
            graph.add_entity(Entity::deserialize_as(kind, record)?);
        }
    }

    for relation in document.relations {
        graph.add_relation(relation.src, relation.label, relation.dst);
    }

    Ok(graph)
}

/// Write a graph snapshot as pretty JSON, creating parent directories
pub fn save_graph<P: AsRef<Path>>(graph: &KnowledgeGraph, path: P) -> Result<(), StoreError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(&graph_to_json(graph)?)?;
    std::fs::write(path, json).map_err(|e| StoreError::io(path, e))?;
    info!(
        "Saved graph snapshot to {} ({} entities, {} relations)",
        path.display(),
        graph.len(),
        graph.relations().len()
    );
    Ok(())
}

/// Read a graph snapshot written by [`save_graph`]
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<KnowledgeGraph, StoreError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let graph = graph_from_json(serde_json::from_str(&contents)?)?;
    info!(
        "Loaded graph snapshot from {} ({} entities, {} relations)",
        path.display(),
        graph.len(),
        graph.relations().len()
    );
    Ok(graph)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use logos_domain::{
        Argument, Assumption, Claim, Constraint, DecisionOption, EntityId, EthicalEvaluation,
        EthicalFramework, Evidence, RelationLabel, Source, Span, Value as EthicalValue,
    };
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn label_strategy() -> impl Strategy<Value = RelationLabel> {
        prop_oneof![
            Just(RelationLabel::Supports),
            Just(RelationLabel::Challenges),
            Just(RelationLabel::Underlies),
            "[A-Z_]{1,8}".prop_map(RelationLabel::from),
        ]
    }

    fn unit() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(0.0f64..=1.0)
    }

    fn span_strategy() -> impl Strategy<Value = Option<Span>> {
        prop::option::of(
            (
                "[a-z0-9_]{1,8}",
                prop::option::of(any::<u32>()),
                prop::option::of(any::<u32>()),
                prop::option::of((0usize..100_000, 0usize..100_000)),
            )
                .prop_map(|(span_id, page, paragraph, offsets)| {
                    let mut span = Span::new(span_id);
                    span.page = page;
                    span.paragraph = paragraph;
                    if let Some((start, end)) = offsets {
                        span = span.with_offsets(start, end);
                    }
                    span
                }),
        )
    }

    /// Text, optional text, span and one float shared by every record kind
    type Fields = (String, Option<String>, Option<Span>, Option<f64>);

    fn fields() -> impl Strategy<Value = Fields> {
        (".*", prop::option::of(".*"), span_strategy(), unit())
    }

    fn build_graph(
        records: Vec<(Fields, Fields)>,
        polarities: Vec<i8>,
        labels: Vec<RelationLabel>,
    ) -> KnowledgeGraph {
        let mut graph = KnowledgeGraph::new();
        let mut ids: Vec<EntityId> = Vec::new();
        let mut evidence_ids = Vec::new();
        let mut assumption_ids = Vec::new();

        for (i, ((text, extra, span, score), (other, _, other_span, weight))) in
            records.into_iter().enumerate()
        {
            let polarity = polarities.get(i).copied().unwrap_or(1);
            let source_id = ids.first().cloned();

            let mut source = Source::new(text.clone(), "local_document");
            source.uri = extra.clone();
            source.summary = extra.clone().map(|e| e + &other);
            ids.push(graph.add_entity(source));

            let mut claim = Claim::new(text.clone()).with_source(source_id.clone());
            claim.span = span.clone();
            claim.confidence = score;
            let claim_id = graph.add_entity(claim);
            ids.push(claim_id.clone());

            let mut evidence = Evidence::new(other.clone(), "empirical")
                .with_polarity(polarity)
                .with_source(source_id.clone());
            evidence.span = other_span.clone();
            evidence.reliability = score;
            evidence.relevance = weight;
            let evidence_id = graph.add_entity(evidence);
            evidence_ids.push(evidence_id.clone());
            ids.push(evidence_id);

            let mut assumption = Assumption::new(other.clone()).with_source(source_id);
            assumption.span = span;
            assumption.penalty = weight;
            let assumption_id = graph.add_entity(assumption);
            assumption_ids.push(assumption_id.clone());
            ids.push(assumption_id);

            let mut argument =
                Argument::new(claim_id, evidence_ids.clone(), assumption_ids.clone());
            argument.strength = score;
            ids.push(graph.add_entity(argument));

            let value_id = graph.add_entity(EthicalValue {
                id: EntityId::generate("value"),
                name: text.clone(),
                description: extra.clone(),
                weight,
            });
            graph.add_entity(Constraint {
                id: EntityId::generate("constraint"),
                name: other.clone(),
                description: extra.clone(),
                severity: score,
            });
            let option_id = graph.add_entity(DecisionOption {
                id: EntityId::generate("option"),
                label: text.clone(),
                description: None,
                score: weight,
            });
            let framework_id = graph.add_entity(EthicalFramework {
                id: EntityId::generate("framework"),
                name: other.clone(),
                decision_rules: vec![[(text, other)].into_iter().collect()],
            });
            graph.add_entity(EthicalEvaluation {
                id: EntityId::generate("evaluation"),
                framework_id,
                option_id,
                score,
                rationale: extra,
            });
            ids.push(value_id);
        }

        if !ids.is_empty() {
            for (i, label) in labels.into_iter().enumerate() {
                let src = ids[i % ids.len()].clone();
                let dst = ids[(i + 1) % ids.len()].clone();
                graph.add_relation(src, label, dst);
            }
        }
        graph
    }

    fn assert_same_graph(
        before: &KnowledgeGraph,
        after: &KnowledgeGraph,
    ) -> Result<(), TestCaseError> {
        for kind in EntityKind::ALL {
            let expected: Vec<_> = before.entities(kind).collect();
            let actual: Vec<_> = after.entities(kind).collect();
            prop_assert_eq!(expected, actual, "kind {}", kind);
        }
        prop_assert_eq!(after.relations(), before.relations());
        Ok(())
    }

    proptest! {
        /// Property: saving to disk and loading back yields an identical graph
        #[test]
        fn test_snapshot_file_round_trip(
            records in prop::collection::vec((fields(), fields()), 0..4),
            polarities in prop::collection::vec(prop_oneof![Just(1i8), Just(-1i8)], 0..4),
            labels in prop::collection::vec(label_strategy(), 0..8),
        ) {
            let graph = build_graph(records, polarities, labels);
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("graph.json");

            save_graph(&graph, &path).unwrap();
            let loaded = load_graph(&path).unwrap();

            assert_same_graph(&graph, &loaded)?;
        }

        /// Property: unit-interval scores survive the text encoding bit for bit
        #[test]
        fn test_confidence_bits_survive_file_round_trip(confidence in 0.0f64..=1.0) {
            let mut graph = KnowledgeGraph::new();
            let mut claim = Claim::new("Scores persist.");
            claim.confidence = Some(confidence);
            let claim_id = graph.add_entity(claim);

            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("graph.json");
            save_graph(&graph, &path).unwrap();
            let loaded = load_graph(&path).unwrap();

            let reloaded = loaded.claim(&claim_id).and_then(|c| c.confidence).unwrap();
            prop_assert_eq!(reloaded.to_bits(), confidence.to_bits());
        }
    }

    #[test]
    fn test_known_lossy_float_round_trips() {
        // Parsed one ULP high without exact float parsing
        let confidence = f64::from_bits(0x3fef_80f5_9db4_3463);
        let mut graph = KnowledgeGraph::new();
        let mut claim = Claim::new("Scores persist.");
        claim.confidence = Some(confidence);
        let claim_id = graph.add_entity(claim);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        save_graph(&graph, &path).unwrap();
        let loaded = load_graph(&path).unwrap();

        assert_eq!(loaded.claim(&claim_id).unwrap().confidence, Some(confidence));
    }
}
