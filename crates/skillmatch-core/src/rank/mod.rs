//! Ranking: content, popularity, and hybrid fusion.
//!
//! Three rankers operate over an immutable
//! [`CatalogSnapshot`](crate::catalog::CatalogSnapshot):
//!
//! - `content`: TF-IDF cosine similarity against a free-text query
//! - `popularity`: job-level filter ordered by the popularity signal
//! - `hybrid`: fuses both signals with a consensus boost, and holds the
//!   four-branch dispatch for the optional query / optional level contract
//!
//! Every ranker breaks score ties by ascending item id, so a fixed
//! catalog and query always produce the same ordering regardless of
//! insertion order.

pub mod content;
pub mod hybrid;
pub mod popularity;

use crate::catalog::ItemId;

/// Transient pairing of an item id with a ranking score.
///
/// Produced fresh by every ranker and never mutated in place; fusion
/// builds new `ScoredItem` values rather than rewriting inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem {
    /// Item this score belongs to
    pub id: ItemId,
    /// Ranker-specific score (similarity, popularity, or fused score)
    pub score: f32,
}

impl ScoredItem {
    /// Creates a scored item.
    pub fn new(id: ItemId, score: f32) -> Self {
        Self { id, score }
    }
}
