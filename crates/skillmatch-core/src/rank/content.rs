//! Content ranker: TF-IDF cosine similarity against a query string.

use super::ScoredItem;
use crate::catalog::CatalogSnapshot;
use crate::error::Result;
use tracing::instrument;

/// Ranks every catalog item by similarity to `query` and returns the
/// top `top_n` as `(id, similarity)` pairs.
///
/// Ordering is similarity descending with ties broken by ascending item
/// id. If `top_n` exceeds the catalog size, all items are returned. An
/// empty (or entirely out-of-vocabulary) query produces the zero vector,
/// so every item scores 0.0 and the result is plain id order — a valid
/// degenerate case, not an error.
#[instrument(skip(snapshot), fields(catalog = snapshot.len()))]
pub fn rank(snapshot: &CatalogSnapshot, query: &str, top_n: usize) -> Result<Vec<ScoredItem>> {
    let query_vector = snapshot.vectorizer().transform(query)?;

    // Items are stored in ascending id order, so scoring in storage
    // order gives the tie-break for free; the sort below keeps it
    // explicit anyway.
    let mut scored: Vec<ScoredItem> = snapshot
        .items()
        .iter()
        .zip(snapshot.item_vectors())
        .map(|(item, vector)| ScoredItem::new(item.id, query_vector.cosine_similarity(vector)))
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    scored.truncate(top_n);
    Ok(scored)
}
