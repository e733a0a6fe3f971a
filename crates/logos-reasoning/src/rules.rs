//! Rule identifiers recorded on reasoning steps

/// Reliability looked up from the evidence-type baseline table
pub const RELIABILITY_BASELINE: &str = "reliability.baseline";

/// Starting relevance before any relevance rule applies
pub const RELEVANCE_BASELINE: &str = "relevance.baseline";

/// Combined claim confidence before assumption penalties
pub const CLAIM_CONFIDENCE: &str = "claim.confidence";

/// Total penalty for assumptions underlying a claim
pub const ASSUMPTION_PENALTY: &str = "assumption.penalty";

/// Argument strength from claim confidence and evidence coherence
pub const ARGUMENT_STRENGTH: &str = "argument.strength";

/// Relevance rule: claim and evidence share at least one token
pub const REL_MATCH_TITLE: &str = "rel.match.title";

/// Relevance rule: claim and evidence share no tokens
pub const REL_SCOPE_MISMATCH: &str = "rel.scope.mismatch";
