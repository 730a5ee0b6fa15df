//! Standard Information Retrieval metrics for ranking quality.
//!
//! Implements the three metrics the harness reports:
//! - Precision@k
//! - Recall@k
//! - Average Precision (aggregated into MAP across test cases)
//!
//! All functions take a ranked result list (best first) and the set of
//! ground-truth relevant ids. `k = 0` is a configuration error, never a
//! silent `0/0`; an empty relevant set yields 0.0 for recall and AP — a
//! labeled case needs at least one relevant id to be meaningful, so an
//! unlabeled case contributes zero rather than failing.

use crate::catalog::ItemId;
use crate::error::{RecommendError, Result};
use crate::rank::ScoredItem;
use std::collections::BTreeSet;

/// Computes Precision@k: the fraction of the top `k` ranked items whose
/// id is in `relevant`.
///
/// # Formula
///
/// ```text
/// P@k = |relevant ∩ top_k| / k
/// ```
///
/// # Errors
///
/// Returns [`RecommendError::Configuration`] if `k` is 0.
pub fn precision_at_k(
    ranked: &[ScoredItem],
    relevant: &BTreeSet<ItemId>,
    k: usize,
) -> Result<f64> {
    if k == 0 {
        return Err(RecommendError::Configuration(
            "precision@k requires k > 0".to_string(),
        ));
    }

    let hits = ranked
        .iter()
        .take(k)
        .filter(|scored| relevant.contains(&scored.id))
        .count();
    Ok(hits as f64 / k as f64)
}

/// Computes Recall@k: the fraction of `relevant` found within the top
/// `k` ranked items.
///
/// # Formula
///
/// ```text
/// R@k = |relevant ∩ top_k| / |relevant|
/// ```
///
/// An empty `relevant` set yields 0.0.
///
/// # Errors
///
/// Returns [`RecommendError::Configuration`] if `k` is 0.
pub fn recall_at_k(
    ranked: &[ScoredItem],
    relevant: &BTreeSet<ItemId>,
    k: usize,
) -> Result<f64> {
    if k == 0 {
        return Err(RecommendError::Configuration(
            "recall@k requires k > 0".to_string(),
        ));
    }
    if relevant.is_empty() {
        return Ok(0.0);
    }

    let hits = ranked
        .iter()
        .take(k)
        .filter(|scored| relevant.contains(&scored.id))
        .count();
    Ok(hits as f64 / relevant.len() as f64)
}

/// Computes Average Precision over the full ranked list.
///
/// For each position holding a relevant item, precision at that position
/// is accumulated; the sum is divided by `|relevant|`. This is the
/// standard AP definition, not truncated to a fixed cutoff.
///
/// # Formula
///
/// ```text
/// AP = (1 / |relevant|) * Σ P(k) * rel(k)    for k in 1..=len
/// ```
///
/// An empty `relevant` set yields 0.0.
pub fn average_precision(ranked: &[ScoredItem], relevant: &BTreeSet<ItemId>) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }

    let mut precision_sum = 0.0;
    let mut hits = 0usize;
    for (i, scored) in ranked.iter().enumerate() {
        if relevant.contains(&scored.id) {
            hits += 1;
            precision_sum += hits as f64 / (i + 1) as f64;
        }
    }
    precision_sum / relevant.len() as f64
}
