//! Engine configuration constants.
//!
//! This module contains the constants that define the ranking and
//! evaluation behavior of skillmatch. They are referenced throughout the
//! codebase and in tests to ensure consistency.

// =============================================================================
// Hybrid Ranking Configuration
// =============================================================================

/// Score boost applied when an item appears in both the content and the
/// popularity candidate lists.
///
/// An item surfaced by both signals gets its content similarity increased
/// by this constant, rewarding consensus between the rankers. The final
/// score for such an item is `similarity + CONSENSUS_BOOST`.
pub const CONSENSUS_BOOST: f32 = 0.5;

/// Candidate over-fetch factor for hybrid fusion.
///
/// When both a query and a job level are supplied, each ranker is asked
/// for `top_n * CANDIDATE_MULTIPLIER` candidates before the union is
/// fused and truncated back to `top_n`. Over-fetching gives items that
/// rank moderately in both lists a chance to surface after boosting.
pub const CANDIDATE_MULTIPLIER: usize = 2;

// =============================================================================
// Evaluation Configuration
// =============================================================================

/// Number of recommendations requested per test case during evaluation.
pub const EVAL_TOP_N: usize = 5;

/// Cutoff used for precision@k and recall@k during evaluation.
pub const EVAL_K: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_cutoff_within_top_n() {
        // Metrics at k are computed over the top EVAL_TOP_N results, so
        // the cutoff must not exceed the number of results requested.
        // Explicit bindings avoid clippy::assertions_on_constants.
        let (k, top_n) = (EVAL_K, EVAL_TOP_N);
        assert!(k <= top_n);
    }

    #[test]
    fn test_candidate_multiplier_overfetches() {
        let multiplier = CANDIDATE_MULTIPLIER;
        assert!(multiplier >= 2);
    }
}
