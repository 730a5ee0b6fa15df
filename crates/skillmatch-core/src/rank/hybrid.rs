//! Hybrid fusion of content similarity and popularity ranking.
//!
//! The combiner dispatches on which signals are present:
//!
//! 1. **Query + job level**: pull `2 × top_n` candidates from each
//!    ranker, union them by item id, boost consensus, re-rank.
//! 2. **Query only**: content ranking as-is.
//! 3. **Job level only**: popularity ranking as-is.
//! 4. **Neither**: global popularity fallback over the whole catalog.
//!
//! # Fusion rule
//!
//! The candidate union is keyed by item id in an ordered map. An item
//! found only in the content list keeps its similarity score; an item
//! found only in the popularity list was never scored against the query
//! and enters with similarity 0.0; an item found in both lists gets its
//! similarity increased by [`CONSENSUS_BOOST`]. Final ordering is fused
//! score descending, then raw popularity descending, then ascending id.

use super::{content, popularity, ScoredItem};
use crate::catalog::{CatalogSnapshot, JobLevel};
use crate::config::{CANDIDATE_MULTIPLIER, CONSENSUS_BOOST};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Produces the top `top_n` recommendations for an optional query and
/// an optional job level.
///
/// See the module docs for the four-branch contract. Score ties are
/// always broken deterministically, so repeated calls over the same
/// snapshot return the same ordering.
#[instrument(skip(snapshot), fields(catalog = snapshot.len()))]
pub fn recommend(
    snapshot: &CatalogSnapshot,
    query: Option<&str>,
    level: Option<JobLevel>,
    top_n: usize,
) -> Result<Vec<ScoredItem>> {
    match (query, level) {
        (Some(query), Some(level)) => fuse(snapshot, query, level, top_n),
        (Some(query), None) => content::rank(snapshot, query, top_n),
        (None, Some(level)) => Ok(popularity::rank(snapshot, level, top_n)),
        (None, None) => Ok(popularity_fallback(snapshot, top_n)),
    }
}

/// Fuses content and popularity candidate lists into one ranking.
fn fuse(
    snapshot: &CatalogSnapshot,
    query: &str,
    level: JobLevel,
    top_n: usize,
) -> Result<Vec<ScoredItem>> {
    let candidates = top_n.saturating_mul(CANDIDATE_MULTIPLIER);
    let content_candidates = content::rank(snapshot, query, candidates)?;
    let popularity_candidates = popularity::rank(snapshot, level, candidates);

    // Ordered union keyed by item id: similarity for content candidates,
    // 0.0 for popularity-only candidates, boosted when present in both.
    let mut fused: BTreeMap<_, f32> = content_candidates
        .iter()
        .map(|scored| (scored.id, scored.score))
        .collect();
    for candidate in &popularity_candidates {
        fused
            .entry(candidate.id)
            .and_modify(|score| *score += CONSENSUS_BOOST)
            .or_insert(0.0);
    }

    debug!(
        content = content_candidates.len(),
        popularity = popularity_candidates.len(),
        fused = fused.len(),
        "fused candidate lists"
    );

    let mut ranked: Vec<ScoredItem> = fused
        .into_iter()
        .map(|(id, score)| ScoredItem::new(id, score))
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| raw_popularity(snapshot, b).total_cmp(&raw_popularity(snapshot, a)))
            .then(a.id.cmp(&b.id))
    });
    ranked.truncate(top_n);
    Ok(ranked)
}

/// Global fallback when neither query nor level is supplied: the whole
/// catalog by popularity descending, ties by ascending id.
fn popularity_fallback(snapshot: &CatalogSnapshot, top_n: usize) -> Vec<ScoredItem> {
    let mut ranked: Vec<ScoredItem> = snapshot
        .items()
        .iter()
        .map(|item| ScoredItem::new(item.id, item.popularity))
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    ranked.truncate(top_n);
    ranked
}

/// Popularity of a fused candidate, used as the secondary sort key.
fn raw_popularity(snapshot: &CatalogSnapshot, scored: &ScoredItem) -> f32 {
    // Candidates come from rankers over the same snapshot, so the
    // lookup cannot miss; 0.0 keeps the sort total regardless.
    snapshot.get(scored.id).map_or(0.0, |item| item.popularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssessmentItem, ItemId};

    fn item(
        id: u64,
        description: &str,
        levels: &[JobLevel],
        popularity: f32,
    ) -> AssessmentItem {
        AssessmentItem {
            id: ItemId::from_u64(id),
            name: format!("Assessment {id}"),
            description: description.to_string(),
            skills: vec![],
            job_levels: levels.iter().copied().collect(),
            duration_minutes: 30,
            popularity,
        }
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::build(vec![
            item(1, "cognitive verbal reasoning", &[JobLevel::Entry], 8.5),
            item(2, "personality questionnaire", &[JobLevel::All], 9.0),
            item(3, "situational judgment", &[JobLevel::Senior], 7.8),
        ])
        .unwrap()
    }

    #[test]
    fn test_consensus_boost_applied_once() {
        let snap = snapshot();
        // Item 1 matches the query and the entry level, so its fused
        // score is its similarity plus the boost.
        let content_only = content::rank(&snap, "cognitive reasoning", 6).unwrap();
        let similarity = content_only
            .iter()
            .find(|s| s.id == ItemId::from_u64(1))
            .unwrap()
            .score;

        let fused = recommend(&snap, Some("cognitive reasoning"), Some(JobLevel::Entry), 3)
            .unwrap();
        let boosted = fused
            .iter()
            .find(|s| s.id == ItemId::from_u64(1))
            .unwrap()
            .score;

        assert!((boosted - (similarity + CONSENSUS_BOOST)).abs() < 1e-6);
        assert!(boosted > similarity);
    }

    #[test]
    fn test_popularity_only_candidate_enters_with_zero_similarity() {
        // Catalog larger than the 2x over-fetch window: item 8 matches
        // the level but falls outside the content candidate list, so it
        // enters the union from the popularity side alone and must
        // carry similarity 0.0 despite the highest popularity.
        let mut items = vec![
            item(1, "cognitive verbal reasoning", &[], 5.0),
            item(2, "cognitive logical puzzles", &[], 4.0),
        ];
        for id in 3..=7 {
            items.push(item(id, "unrelated content", &[], 1.0));
        }
        items.push(item(8, "different content entirely", &[JobLevel::Entry], 9.9));
        let snap = CatalogSnapshot::build(items).unwrap();

        // top_n = 3 fetches 6 content candidates: items 1 and 2 by
        // similarity, then zero-similarity items 3..=6 by id. Item 8 is
        // excluded from the content side.
        let content_candidates = content::rank(&snap, "cognitive reasoning", 6).unwrap();
        assert!(content_candidates.iter().all(|s| s.id != ItemId::from_u64(8)));

        let fused =
            recommend(&snap, Some("cognitive reasoning"), Some(JobLevel::Entry), 3).unwrap();
        let item8 = fused
            .iter()
            .find(|s| s.id == ItemId::from_u64(8))
            .expect("popularity-only candidate should surface in the top 3");
        assert_eq!(item8.score, 0.0);
        // It still ranks below every content-matched item.
        assert_eq!(fused[0].id, ItemId::from_u64(1));
        assert_eq!(fused[1].id, ItemId::from_u64(2));
        assert_eq!(fused[2].id, ItemId::from_u64(8));
    }

    #[test]
    fn test_query_only_matches_content_ranker() {
        let snap = snapshot();
        let via_hybrid = recommend(&snap, Some("personality"), None, 3).unwrap();
        let via_content = content::rank(&snap, "personality", 3).unwrap();
        assert_eq!(via_hybrid, via_content);
    }

    #[test]
    fn test_level_only_matches_popularity_ranker() {
        let snap = snapshot();
        let via_hybrid = recommend(&snap, None, Some(JobLevel::Senior), 3).unwrap();
        let via_popularity = popularity::rank(&snap, JobLevel::Senior, 3);
        assert_eq!(via_hybrid, via_popularity);
    }

    #[test]
    fn test_no_signals_falls_back_to_global_popularity() {
        let snap = snapshot();
        let results = recommend(&snap, None, None, 3).unwrap();
        let ids: Vec<u64> = results.iter().map(|r| r.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_equal_fused_scores_break_by_popularity_then_id() {
        let snap = CatalogSnapshot::build(vec![
            item(4, "alpha", &[JobLevel::Entry], 3.0),
            item(2, "beta", &[JobLevel::Entry], 3.0),
            item(9, "gamma", &[JobLevel::Entry], 6.0),
        ])
        .unwrap();
        // Query matches nothing: every candidate fuses to the boost
        // value, so popularity then id decide the order.
        let results =
            recommend(&snap, Some("unrelated query"), Some(JobLevel::Entry), 3).unwrap();
        let ids: Vec<u64> = results.iter().map(|r| r.id.as_u64()).collect();
        assert_eq!(ids, vec![9, 2, 4]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let snap = snapshot();
        let results =
            recommend(&snap, Some("cognitive"), Some(JobLevel::Entry), 1).unwrap();
        assert_eq!(results.len(), 1);
    }
}
