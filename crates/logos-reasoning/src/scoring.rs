//! Confidence and strength scoring
//!
//! Implements the evidence-weighted confidence formula:
//! 1. Per-evidence magnitude = reliability × relevance
//! 2. Net confidence = (support − challenge) / (support + challenge + k)
//! 3. Normalization to [0, 1] and volume discount 1 − e^(−n)
//! 4. Capped assumption penalty
//!
//! Every function is pure over `&KnowledgeGraph` and `&Rulebook`; each call
//! builds its own trace, so steps from different subjects never interleave.

use crate::error::ScoringError;
use crate::rules;
use crate::Rulebook;
use logos_domain::{
    Claim, EntityId, Evidence, ExplanationTrace, KnowledgeGraph, ReasoningStep, RelationLabel,
    RelationQuery, UncertaintyMarker,
};
use std::collections::HashSet;
use tracing::debug;

/// Weight of claim confidence in argument strength
const CONFIDENCE_WEIGHT: f64 = 0.7;

/// Weight of evidence coherence in argument strength
const COHERENCE_WEIGHT: f64 = 0.3;

/// Severity attached to an unknown evidence type
const UNKNOWN_TYPE_SEVERITY: f64 = 0.3;

/// A score with the steps and uncertainty markers that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Final score in [0, 1]
    pub score: f64,
    /// Steps in emission order
    pub steps: Vec<ReasoningStep>,
    /// Markers raised along the way
    pub uncertainties: Vec<UncertaintyMarker>,
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Reliability of a piece of evidence from its type's baseline
///
/// Types missing from the baseline table use the `unknown` baseline and
/// raise an uncertainty marker on the evidence.
pub fn score_evidence_reliability(evidence: &Evidence, rulebook: &Rulebook) -> ScoreBreakdown {
    let baseline = rulebook.reliability_baseline(&evidence.evidence_type);
    let steps = vec![ReasoningStep::new(
        rules::RELIABILITY_BASELINE,
        format!("Reliability baseline for {}", evidence.evidence_type),
        baseline,
        Some(baseline),
    )];

    let mut uncertainties = Vec::new();
    if !rulebook.has_reliability_baseline(&evidence.evidence_type) {
        uncertainties.push(UncertaintyMarker::new(
            evidence.id.clone(),
            format!("Unknown evidence type {}.", evidence.evidence_type),
            Some(UNKNOWN_TYPE_SEVERITY),
        ));
    }

    ScoreBreakdown {
        score: clamp_unit(baseline),
        steps,
        uncertainties,
    }
}

/// Lower-cased whitespace tokens; punctuation stays attached
fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Relevance of a piece of evidence to a claim
///
/// Starts from the `relevance_baseline` constant and applies the rulebook's
/// relevance rules in order. Rule ids without a handler are skipped.
pub fn score_evidence_relevance(
    evidence: &Evidence,
    claim: &Claim,
    rulebook: &Rulebook,
) -> ScoreBreakdown {
    let mut score = rulebook.constants().relevance_baseline;
    let mut steps = vec![ReasoningStep::new(
        rules::RELEVANCE_BASELINE,
        "Relevance baseline",
        score,
        Some(score),
    )];

    let claim_tokens = tokens(&claim.text);
    let evidence_tokens = tokens(&evidence.text);
    let overlaps = !claim_tokens.is_disjoint(&evidence_tokens);

    for rule in rulebook.relevance_rules() {
        let (fires, fallback) = match rule.id.as_str() {
            rules::REL_MATCH_TITLE => (overlaps, "match"),
            rules::REL_SCOPE_MISMATCH => (!overlaps, "mismatch"),
            other => {
                debug!("Relevance rule '{}' has no handler, skipping", other);
                continue;
            }
        };
        if !fires {
            continue;
        }
        score += rule.adjustment;
        let description = if rule.description.is_empty() {
            fallback.to_string()
        } else {
            rule.description
        };
        steps.push(ReasoningStep::new(
            rule.id,
            description,
            rule.adjustment,
            Some(score),
        ));
    }

    ScoreBreakdown {
        score: clamp_unit(score),
        steps,
        uncertainties: Vec::new(),
    }
}

/// Bounded ratio of support over challenge, smoothed by `k`
fn net_confidence(support: f64, challenge: f64, k: f64) -> f64 {
    let denominator = support + challenge + k;
    if denominator <= 0.0 {
        return 0.0;
    }
    (support - challenge) / denominator
}

/// Fraction of trust granted for `count` evidence items: 1 − e^(−count)
fn volume_factor(count: usize) -> f64 {
    1.0 - (-(count as f64)).exp()
}

/// Confidence of a claim from the evidence and assumptions pointing at it
///
/// Relations are visited in insertion order, which fixes the order of the
/// steps in the returned trace. Returns [`ScoringError::ClaimNotFound`] if
/// `claim_id` is not a claim in `graph`.
pub fn compute_claim_confidence(
    claim_id: &EntityId,
    graph: &KnowledgeGraph,
    rulebook: &Rulebook,
) -> Result<(f64, ExplanationTrace), ScoringError> {
    let claim = graph
        .claim(claim_id)
        .ok_or_else(|| ScoringError::ClaimNotFound(claim_id.clone()))?;
    let constants = rulebook.constants();

    let mut steps = Vec::new();
    let mut uncertainties = Vec::new();
    let mut support = 0.0;
    let mut challenge = 0.0;
    let mut evidence_count = 0usize;

    let incoming = graph.get_relations(&RelationQuery::any().to(claim_id));

    for relation in &incoming {
        let supports = match relation.label {
            RelationLabel::Supports => true,
            RelationLabel::Challenges => false,
            _ => continue,
        };
        let Some(evidence) = graph.evidence(&relation.src) else {
            continue;
        };

        let reliability = score_evidence_reliability(evidence, rulebook);
        let relevance = score_evidence_relevance(evidence, claim, rulebook);
        let magnitude = reliability.score * relevance.score;

        steps.extend(reliability.steps);
        steps.extend(relevance.steps);
        uncertainties.extend(reliability.uncertainties);
        uncertainties.extend(relevance.uncertainties);

        evidence_count += 1;
        if supports {
            support += magnitude;
        } else {
            challenge += magnitude;
        }
    }

    let net = net_confidence(support, challenge, constants.k);
    let normalized = (net + 1.0) / 2.0;
    let mut score = normalized * volume_factor(evidence_count);
    steps.push(ReasoningStep::new(
        rules::CLAIM_CONFIDENCE,
        format!(
            "Computed claim confidence (support {:.3}, challenge {:.3}, {} evidence item(s))",
            support, challenge, evidence_count
        ),
        score,
        Some(score),
    ));

    let mut penalty = 0.0;
    for relation in &incoming {
        if relation.label != RelationLabel::Underlies {
            continue;
        }
        if graph.assumption(&relation.src).is_some() {
            // Categories are not distinguished yet: every assumption costs the default.
            penalty += rulebook.assumption_penalty("default");
        }
    }
    let penalty = f64::min(penalty, constants.penalty_cap);
    if penalty > 0.0 {
        score = clamp_unit(score - penalty);
        steps.push(ReasoningStep::new(
            rules::ASSUMPTION_PENALTY,
            "Applied assumption penalty",
            -penalty,
            Some(score),
        ));
    }

    let score = clamp_unit(score);
    debug!(
        "Claim {} confidence {:.4} (support {:.4}, challenge {:.4}, penalty {:.4})",
        claim_id, score, support, challenge, penalty
    );
    Ok((
        score,
        ExplanationTrace::new(claim_id.clone(), steps, uncertainties),
    ))
}

/// Strength of an argument: 0.7 × claim confidence + 0.3 × coherence
///
/// Coherence is the mean reliability of the argument's listed evidence
/// (0.0 when none resolves). The claim's trace is reused, extended by one
/// step, and re-tagged to the argument.
pub fn compute_argument_strength(
    argument_id: &EntityId,
    graph: &KnowledgeGraph,
    rulebook: &Rulebook,
) -> Result<(f64, ExplanationTrace), ScoringError> {
    let argument = graph
        .argument(argument_id)
        .ok_or_else(|| ScoringError::ArgumentNotFound(argument_id.clone()))?;

    let (claim_confidence, mut trace) =
        compute_claim_confidence(&argument.claim_id, graph, rulebook)?;

    let reliabilities: Vec<f64> = argument
        .evidence_ids
        .iter()
        .filter_map(|id| graph.evidence(id))
        .map(|evidence| score_evidence_reliability(evidence, rulebook).score)
        .collect();
    let coherence = if reliabilities.is_empty() {
        0.0
    } else {
        reliabilities.iter().sum::<f64>() / reliabilities.len() as f64
    };

    let strength = clamp_unit(CONFIDENCE_WEIGHT * claim_confidence + COHERENCE_WEIGHT * coherence);
    trace.push_step(ReasoningStep::new(
        rules::ARGUMENT_STRENGTH,
        format!(
            "Computed argument strength (confidence {:.3}, coherence {:.3})",
            claim_confidence, coherence
        ),
        strength,
        Some(strength),
    ));
    trace.retag(argument_id.clone());

    debug!("Argument {} strength {:.4}", argument_id, strength);
    Ok((strength, trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_domain::{Argument, Assumption};

    fn rulebook() -> Rulebook {
        Rulebook::default_rules().unwrap()
    }

    fn scenario(with_assumption: bool) -> (KnowledgeGraph, EntityId) {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("The system is reliable."));
        let supporting = graph.add_entity(
            Evidence::new("Empirical study shows reliability.", "empirical").with_polarity(1),
        );
        let challenging = graph.add_entity(
            Evidence::new("Anecdotal report suggests failure.", "anecdotal").with_polarity(-1),
        );
        graph.add_relation(supporting, RelationLabel::Supports, claim.clone());
        graph.add_relation(challenging, RelationLabel::Challenges, claim.clone());
        if with_assumption {
            let assumption = graph.add_entity(Assumption::new("Data is representative."));
            graph.add_relation(assumption, RelationLabel::Underlies, claim.clone());
        }
        (graph, claim)
    }

    #[test]
    fn test_reliability_known_type() {
        let evidence = Evidence::new("x", "empirical");
        let result = score_evidence_reliability(&evidence, &rulebook());
        assert_eq!(result.score, 0.9);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].rule_id, rules::RELIABILITY_BASELINE);
        assert!(result.uncertainties.is_empty());
    }

    #[test]
    fn test_reliability_unknown_type_raises_marker() {
        let evidence = Evidence::new("x", "rumor");
        let result = score_evidence_reliability(&evidence, &rulebook());
        assert_eq!(result.score, 0.5);
        assert_eq!(result.uncertainties.len(), 1);
        assert_eq!(result.uncertainties[0].subject_id, evidence.id);
        assert_eq!(result.uncertainties[0].severity, Some(0.3));
        assert_eq!(result.uncertainties[0].note, "Unknown evidence type rumor.");
    }

    #[test]
    fn test_relevance_overlap_applies_match_rule() {
        let claim = Claim::new("Coffee improves focus.");
        let evidence = Evidence::new("A trial found coffee helps.", "empirical");
        let result = score_evidence_relevance(&evidence, &claim, &rulebook());

        assert!((result.score - 0.7).abs() < 1e-9);
        let rule_ids: Vec<_> = result.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(rule_ids, vec![rules::RELEVANCE_BASELINE, rules::REL_MATCH_TITLE]);
    }

    #[test]
    fn test_relevance_disjoint_applies_mismatch_rule() {
        let claim = Claim::new("Coffee improves focus.");
        let evidence = Evidence::new("Tea is popular.", "empirical");
        let result = score_evidence_relevance(&evidence, &claim, &rulebook());

        assert!((result.score - 0.3).abs() < 1e-9);
        assert_eq!(result.steps.last().unwrap().rule_id, rules::REL_SCOPE_MISMATCH);
        assert_eq!(result.steps.last().unwrap().delta, -0.2);
    }

    #[test]
    fn test_relevance_is_clamped() {
        let rulebook = Rulebook::from_toml_str(
            r#"
            [evidence_reliability_baselines]
            unknown = 0.5
            [[relevance_rules]]
            id = "rel.scope.mismatch"
            adjustment = -2.0
            [assumption_penalties]
            default = 0.1
            [constants]
            "#,
        )
        .unwrap();
        let result = score_evidence_relevance(
            &Evidence::new("alpha", "x"),
            &Claim::new("beta"),
            &rulebook,
        );
        assert_eq!(result.score, 0.0);
        assert_eq!(result.steps[1].description, "mismatch");
    }

    #[test]
    fn test_zero_evidence_scores_zero() {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("Unsupported."));
        let (score, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();

        assert_eq!(score, 0.0);
        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.steps[0].rule_id, rules::CLAIM_CONFIDENCE);
    }

    #[test]
    fn test_scenario_values() {
        let (graph, claim) = scenario(false);
        let (score, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();

        // Neither evidence shares a token with the claim, so relevance is 0.3 for both.
        let support = 0.9 * 0.3;
        let challenge = 0.4 * 0.3;
        let net = (support - challenge) / (support + challenge + 0.5);
        assert!(support > challenge);
        assert!(net > 0.0);
        let normalized = (net + 1.0) / 2.0;
        assert!(normalized > 0.5);
        let expected = normalized * (1.0 - (-2.0f64).exp());

        assert!((score - expected).abs() < 1e-9);
        assert!(score > 0.0 && score < normalized);

        let confidence_steps: Vec<_> = trace.steps_for_rule(rules::CLAIM_CONFIDENCE).collect();
        assert_eq!(confidence_steps.len(), 1);
        assert_eq!(confidence_steps[0].resulting_score, Some(score));
    }

    #[test]
    fn test_scenario_step_order_follows_relations() {
        let (graph, claim) = scenario(true);
        let (_, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        let rule_ids: Vec<_> = trace.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                rules::RELIABILITY_BASELINE,
                rules::RELEVANCE_BASELINE,
                rules::REL_SCOPE_MISMATCH,
                rules::RELIABILITY_BASELINE,
                rules::RELEVANCE_BASELINE,
                rules::REL_SCOPE_MISMATCH,
                rules::CLAIM_CONFIDENCE,
                rules::ASSUMPTION_PENALTY,
            ]
        );
        assert_eq!(trace.steps[0].description, "Reliability baseline for empirical");
        assert_eq!(trace.steps[3].description, "Reliability baseline for anecdotal");
    }

    #[test]
    fn test_assumption_lowers_score() {
        let (with_graph, with_claim) = scenario(true);
        let (without_graph, without_claim) = scenario(false);
        let (with, trace) = compute_claim_confidence(&with_claim, &with_graph, &rulebook()).unwrap();
        let (without, _) =
            compute_claim_confidence(&without_claim, &without_graph, &rulebook()).unwrap();

        assert!(with < without);
        assert!((without - with - 0.1).abs() < 1e-9);
        let penalty = trace.steps.last().unwrap();
        assert_eq!(penalty.rule_id, rules::ASSUMPTION_PENALTY);
        assert!((penalty.delta + 0.1).abs() < 1e-9);
        assert_eq!(penalty.resulting_score, Some(with));
    }

    #[test]
    fn test_penalty_is_capped() {
        let (mut graph, claim) = scenario(false);
        for _ in 0..10 {
            let assumption = graph.add_entity(Assumption::new("Another premise."));
            graph.add_relation(assumption, RelationLabel::Underlies, claim.clone());
        }
        let (_, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        let penalty = trace.steps_for_rule(rules::ASSUMPTION_PENALTY).next().unwrap();
        assert!((penalty.delta + 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_relations_count_twice() {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("Claim text."));
        let evidence = graph.add_entity(Evidence::new("Claim text.", "empirical"));
        graph.add_relation(evidence.clone(), RelationLabel::Supports, claim.clone());
        let (once, _) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();

        graph.add_relation(evidence, RelationLabel::Supports, claim.clone());
        let (twice, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();

        assert!(twice > once);
        assert_eq!(trace.steps_for_rule(rules::RELIABILITY_BASELINE).count(), 2);
    }

    #[test]
    fn test_non_evidence_sources_are_ignored() {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("Claim."));
        let other_claim = graph.add_entity(Claim::new("Other."));
        graph.add_relation(other_claim, RelationLabel::Supports, claim.clone());
        graph.add_relation(EntityId::from("dangling"), RelationLabel::Supports, claim.clone());

        let (score, _) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_unknown_evidence_type_marker_reaches_trace() {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("Claim."));
        let evidence = graph.add_entity(Evidence::new("Something.", "hearsay"));
        graph.add_relation(evidence.clone(), RelationLabel::Supports, claim.clone());

        let (_, trace) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        assert_eq!(trace.uncertainty_markers.len(), 1);
        assert_eq!(trace.uncertainty_markers[0].subject_id, evidence);
    }

    #[test]
    fn test_claim_not_found() {
        let graph = KnowledgeGraph::new();
        let missing = EntityId::from("claim_missing");
        let err = compute_claim_confidence(&missing, &graph, &rulebook()).unwrap_err();
        assert_eq!(err, ScoringError::ClaimNotFound(missing));
    }

    #[test]
    fn test_claim_lookup_rejects_other_kinds() {
        let mut graph = KnowledgeGraph::new();
        let evidence = graph.add_entity(Evidence::new("e", "empirical"));
        assert!(compute_claim_confidence(&evidence, &graph, &rulebook()).is_err());
    }

    #[test]
    fn test_argument_strength() {
        let (mut graph, claim) = scenario(false);
        let evidence_ids = graph.ids(logos_domain::EntityKind::Evidence);
        let argument = graph.add_entity(Argument::new(claim.clone(), evidence_ids, Vec::new()));

        let (confidence, _) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        let (strength, trace) = compute_argument_strength(&argument, &graph, &rulebook()).unwrap();

        let coherence = (0.9 + 0.4) / 2.0;
        assert!((strength - (0.7 * confidence + 0.3 * coherence)).abs() < 1e-9);
        assert_eq!(trace.subject_id, argument);
        let last = trace.steps.last().unwrap();
        assert_eq!(last.rule_id, rules::ARGUMENT_STRENGTH);
        assert_eq!(last.resulting_score, Some(strength));
        assert_eq!(trace.steps_for_rule(rules::CLAIM_CONFIDENCE).count(), 1);
    }

    #[test]
    fn test_argument_without_evidence_has_zero_coherence() {
        let (mut graph, claim) = scenario(false);
        let argument = graph.add_entity(Argument::new(claim.clone(), Vec::new(), Vec::new()));

        let (confidence, _) = compute_claim_confidence(&claim, &graph, &rulebook()).unwrap();
        let (strength, _) = compute_argument_strength(&argument, &graph, &rulebook()).unwrap();
        assert!((strength - 0.7 * confidence).abs() < 1e-9);
    }

    #[test]
    fn test_argument_not_found() {
        let graph = KnowledgeGraph::new();
        let missing = EntityId::from("argument_missing");
        let err = compute_argument_strength(&missing, &graph, &rulebook()).unwrap_err();
        assert_eq!(err, ScoringError::ArgumentNotFound(missing));
    }

    #[test]
    fn test_argument_with_missing_claim() {
        let mut graph = KnowledgeGraph::new();
        let claim = EntityId::from("claim_gone");
        let argument = graph.add_entity(Argument::new(claim.clone(), Vec::new(), Vec::new()));
        let err = compute_argument_strength(&argument, &graph, &rulebook()).unwrap_err();
        assert_eq!(err, ScoringError::ClaimNotFound(claim));
    }

    #[test]
    fn test_zero_k_without_evidence_is_total() {
        assert_eq!(net_confidence(0.0, 0.0, 0.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use logos_domain::{Argument, Assumption, EntityKind};
    use proptest::prelude::*;

    const TYPES: [&str; 4] = ["empirical", "anecdotal", "statistical", "rumor"];

    fn build_graph(
        supports: &[(usize, bool)],
        challenges: &[(usize, bool)],
        assumptions: usize,
    ) -> (KnowledgeGraph, EntityId) {
        let mut graph = KnowledgeGraph::new();
        let claim = graph.add_entity(Claim::new("Water boils at sea level."));
        for (label, items) in [
            (RelationLabel::Supports, supports),
            (RelationLabel::Challenges, challenges),
        ] {
            for &(type_index, overlaps) in items {
                let text = if overlaps { "water is hot" } else { "unrelated note" };
                let evidence = graph.add_entity(Evidence::new(text, TYPES[type_index]));
                graph.add_relation(evidence, label.clone(), claim.clone());
            }
        }
        for _ in 0..assumptions {
            let assumption = graph.add_entity(Assumption::new("Pressure is standard."));
            graph.add_relation(assumption, RelationLabel::Underlies, claim.clone());
        }
        (graph, claim)
    }

    proptest! {
        /// Property: claim confidence always lies in [0, 1]
        #[test]
        fn test_claim_confidence_range(
            supports in prop::collection::vec((0..4usize, any::<bool>()), 0..6),
            challenges in prop::collection::vec((0..4usize, any::<bool>()), 0..6),
            assumptions in 0..6usize,
        ) {
            let rulebook = Rulebook::default_rules().unwrap();
            let (graph, claim) = build_graph(&supports, &challenges, assumptions);
            let (score, trace) = compute_claim_confidence(&claim, &graph, &rulebook).unwrap();

            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
            prop_assert_eq!(trace.final_score(), Some(score));
        }

        /// Property: argument strength always lies in [0, 1]
        #[test]
        fn test_argument_strength_range(
            supports in prop::collection::vec((0..4usize, any::<bool>()), 0..6),
            challenges in prop::collection::vec((0..4usize, any::<bool>()), 0..6),
            assumptions in 0..6usize,
            dangling in 0..3usize,
        ) {
            let rulebook = Rulebook::default_rules().unwrap();
            let (mut graph, claim) = build_graph(&supports, &challenges, assumptions);
            let mut evidence_ids = graph.ids(EntityKind::Evidence);
            // Ids that resolve to nothing are ignored by coherence
            evidence_ids.extend(
                (0..dangling).map(|i| EntityId::from(format!("evidence_missing_{}", i))),
            );
            let assumption_ids = graph.ids(EntityKind::Assumption);
            let argument = graph.add_entity(Argument::new(claim, evidence_ids, assumption_ids));

            let (strength, trace) = compute_argument_strength(&argument, &graph, &rulebook).unwrap();

            prop_assert!((0.0..=1.0).contains(&strength), "strength {} out of range", strength);
            prop_assert_eq!(trace.final_score(), Some(strength));
            prop_assert_eq!(&trace.subject_id, &argument);
        }

        /// Property: adding supporting evidence never lowers confidence
        #[test]
        fn test_support_is_monotonic(
            supports in prop::collection::vec((0..4usize, any::<bool>()), 0..5),
            extra in (0..4usize, any::<bool>()),
        ) {
            let rulebook = Rulebook::default_rules().unwrap();
            let (graph, claim) = build_graph(&supports, &[], 0);
            let (before, _) = compute_claim_confidence(&claim, &graph, &rulebook).unwrap();

            let mut more = supports.clone();
            more.push(extra);
            let (graph, claim) = build_graph(&more, &[], 0);
            let (after, _) = compute_claim_confidence(&claim, &graph, &rulebook).unwrap();

            prop_assert!(after >= before - 1e-12, "{} < {}", after, before);
        }

        /// Property: the assumption penalty never exceeds the cap
        #[test]
        fn test_penalty_never_exceeds_cap(assumptions in 1..20usize) {
            let rulebook = Rulebook::default_rules().unwrap();
            let (graph, claim) = build_graph(&[(0, true)], &[], assumptions);
            let (_, trace) = compute_claim_confidence(&claim, &graph, &rulebook).unwrap();

            let penalty = trace.steps_for_rule(rules::ASSUMPTION_PENALTY).next().unwrap();
            prop_assert!(-penalty.delta <= rulebook.constants().penalty_cap + 1e-12);
        }
    }
}
