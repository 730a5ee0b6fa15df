//! Popularity ranker: job-level filter ordered by the popularity signal.

use super::ScoredItem;
use crate::catalog::{CatalogSnapshot, JobLevel};
use tracing::instrument;

/// Returns the top `top_n` items targeting `level`, ordered by
/// popularity descending with ties broken by ascending item id.
///
/// An item matches when its level set contains `level` or the item is
/// tagged `all` (see
/// [`AssessmentItem::matches_level`](crate::catalog::AssessmentItem::matches_level)).
/// The reported score is the item's popularity. No matching items is a
/// valid outcome and yields an empty vec.
#[instrument(skip(snapshot), fields(catalog = snapshot.len()))]
pub fn rank(snapshot: &CatalogSnapshot, level: JobLevel, top_n: usize) -> Vec<ScoredItem> {
    let mut matched: Vec<ScoredItem> = snapshot
        .items()
        .iter()
        .filter(|item| item.matches_level(level))
        .map(|item| ScoredItem::new(item.id, item.popularity))
        .collect();

    matched.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    matched.truncate(top_n);
    matched
}
