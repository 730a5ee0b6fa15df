//! Recommendation facade: owned catalog state with an explicit refresh
//! lifecycle.
//!
//! [`Recommender`] replaces the process-wide memoized catalog/vectorizer
//! of ad-hoc designs with an explicit owned state object. The catalog
//! and the fitted vectorizer live together inside one
//! [`CatalogSnapshot`] behind an `Arc`:
//! [`refresh_catalog`](Recommender::refresh_catalog) builds the next
//! snapshot off to the side and swaps the reference, so a ranking call
//! that cloned the previous snapshot keeps seeing a consistent
//! (items, vectors) pair and never a catalog whose items changed
//! underneath a fitted vocabulary.

use crate::catalog::{AssessmentItem, CatalogSnapshot, JobLevel};
use crate::error::{RecommendError, Result};
use crate::rank::hybrid;
use std::sync::Arc;
use tracing::{info, instrument};

/// A ranked recommendation: the item paired with its final score.
///
/// The score's meaning depends on the signals supplied to
/// [`Recommender::recommend`]: content similarity (optionally boosted),
/// or raw popularity for level-only and no-signal calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The recommended assessment
    pub item: AssessmentItem,
    /// Final ranking score
    pub score: f32,
}

/// Recommendation engine over an in-memory assessment catalog.
///
/// # Lifecycle
///
/// A fresh `Recommender` holds no catalog; every recommendation call
/// fails with [`RecommendError::NotFitted`] until
/// [`refresh_catalog`](Self::refresh_catalog) succeeds once. The engine
/// never fits implicitly — a missing refresh is a caller bug that must
/// surface, not be hidden by an auto-fit.
///
/// # Example
///
/// ```ignore
/// use skillmatch_core::{Recommender, JobLevel};
///
/// let recommender = Recommender::with_catalog(items)?;
/// let results = recommender.recommend(
///     Some("cognitive reasoning test"),
///     Some(JobLevel::Entry),
///     5,
/// )?;
/// ```
#[derive(Debug, Default)]
pub struct Recommender {
    snapshot: Option<Arc<CatalogSnapshot>>,
}

impl Recommender {
    /// Creates an empty recommender with no catalog loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recommender and loads the given catalog immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Configuration`] if `items` is empty or
    /// contains duplicate ids.
    pub fn with_catalog(items: Vec<AssessmentItem>) -> Result<Self> {
        let mut recommender = Self::new();
        recommender.refresh_catalog(items)?;
        Ok(recommender)
    }

    /// Rebuilds the catalog store and refits the vectorizer.
    ///
    /// The next snapshot is built completely before the current one is
    /// replaced; on error the previous snapshot stays in place and the
    /// engine remains usable.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Configuration`] if `items` is empty or
    /// contains duplicate ids.
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn refresh_catalog(&mut self, items: Vec<AssessmentItem>) -> Result<()> {
        let next = CatalogSnapshot::build(items)?;
        info!(
            items = next.len(),
            vocabulary = next.vectorizer().vocabulary_len(),
            "catalog refreshed"
        );
        self.snapshot = Some(Arc::new(next));
        Ok(())
    }

    /// Returns the top `top_n` recommendations for an optional free-text
    /// query and an optional job level.
    ///
    /// Dispatch follows the hybrid contract (see
    /// [`rank::hybrid`](crate::rank::hybrid)): both signals fuse with a
    /// consensus boost, a single signal uses that ranker alone, and no
    /// signal falls back to global popularity.
    ///
    /// # Errors
    ///
    /// - [`RecommendError::Configuration`] if `top_n` is 0
    /// - [`RecommendError::NotFitted`] if no catalog has been loaded
    #[instrument(skip(self))]
    pub fn recommend(
        &self,
        query: Option<&str>,
        job_level: Option<JobLevel>,
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        if top_n == 0 {
            return Err(RecommendError::Configuration(
                "top_n must be positive".to_string(),
            ));
        }
        let snapshot = self.snapshot.clone().ok_or(RecommendError::NotFitted)?;

        let ranked = hybrid::recommend(&snapshot, query, job_level, top_n)?;
        Ok(ranked
            .into_iter()
            .filter_map(|scored| {
                snapshot
                    .get(scored.id)
                    .map(|item| Recommendation {
                        item: item.clone(),
                        score: scored.score,
                    })
            })
            .collect())
    }

    /// Number of items in the current catalog (0 before the first
    /// refresh).
    pub fn catalog_len(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.len())
    }

    /// Returns true once a catalog has been loaded and fitted.
    pub fn is_fitted(&self) -> bool {
        self.snapshot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemId;

    fn item(id: u64, description: &str, popularity: f32) -> AssessmentItem {
        AssessmentItem {
            id: ItemId::from_u64(id),
            name: format!("Assessment {id}"),
            description: description.to_string(),
            skills: vec![],
            job_levels: [JobLevel::All].into_iter().collect(),
            duration_minutes: 30,
            popularity,
        }
    }

    #[test]
    fn test_recommend_before_refresh_is_not_fitted() {
        let recommender = Recommender::new();
        let result = recommender.recommend(Some("query"), None, 3);
        assert!(matches!(result, Err(RecommendError::NotFitted)));
    }

    #[test]
    fn test_zero_top_n_is_configuration_error() {
        let recommender =
            Recommender::with_catalog(vec![item(1, "cognitive reasoning", 8.0)]).unwrap();
        let result = recommender.recommend(Some("query"), None, 0);
        assert!(matches!(result, Err(RecommendError::Configuration(_))));
    }

    #[test]
    fn test_refresh_with_empty_catalog_keeps_previous_snapshot() {
        let mut recommender =
            Recommender::with_catalog(vec![item(1, "cognitive reasoning", 8.0)]).unwrap();

        let result = recommender.refresh_catalog(vec![]);
        assert!(matches!(result, Err(RecommendError::Configuration(_))));

        // Engine still serves the previous catalog.
        assert_eq!(recommender.catalog_len(), 1);
        assert!(recommender
            .recommend(Some("cognitive"), None, 1)
            .is_ok());
    }

    #[test]
    fn test_refresh_refits_vectorizer() {
        let mut recommender =
            Recommender::with_catalog(vec![item(1, "cognitive reasoning", 8.0)]).unwrap();

        recommender
            .refresh_catalog(vec![item(2, "personality questionnaire", 9.0)])
            .unwrap();

        // Old vocabulary must be gone: the old query scores zero
        // against the only remaining item.
        let results = recommender.recommend(Some("cognitive reasoning"), None, 1).unwrap();
        assert_eq!(results[0].item.id, ItemId::from_u64(2));
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_recommendation_pairs_item_with_score() {
        let recommender = Recommender::with_catalog(vec![
            item(1, "cognitive reasoning", 8.0),
            item(2, "personality questionnaire", 9.0),
        ])
        .unwrap();

        let results = recommender.recommend(Some("personality"), None, 2).unwrap();
        assert_eq!(results[0].item.id, ItemId::from_u64(2));
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let recommender = Recommender::with_catalog(vec![
            item(1, "cognitive reasoning", 8.0),
            item(2, "cognitive puzzles", 8.0),
            item(3, "personality questionnaire", 9.0),
        ])
        .unwrap();

        let first = recommender
            .recommend(Some("cognitive"), Some(JobLevel::Mid), 3)
            .unwrap();
        for _ in 0..5 {
            let again = recommender
                .recommend(Some("cognitive"), Some(JobLevel::Mid), 3)
                .unwrap();
            assert_eq!(first, again);
        }
    }
}
