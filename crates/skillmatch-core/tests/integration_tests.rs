//! End-to-end tests for the skillmatch recommendation engine.
//!
//! These exercise the public API against the built-in sample catalog:
//! ranking scenarios, the hybrid fusion contract, determinism, and the
//! evaluation harness.

use skillmatch_core::evaluation::{self, datasets, TestCase};
use skillmatch_core::{ItemId, JobLevel, RecommendError, Recommender};

fn sample_recommender() -> Recommender {
    Recommender::with_catalog(datasets::sample_catalog()).unwrap()
}

#[test]
fn cognitive_query_ranks_reasoning_assessments_first() {
    let recommender = sample_recommender();

    let results = recommender
        .recommend(Some("cognitive reasoning test"), None, 5)
        .unwrap();

    // Only Verify Interactive (1) and Deductive Reasoning (5) share the
    // cognitive/reasoning vocabulary; they must outrank everything else.
    let top_two: Vec<u64> = results[..2].iter().map(|r| r.item.id.as_u64()).collect();
    assert!(top_two.contains(&1));
    assert!(top_two.contains(&5));
    for lower in &results[2..] {
        assert!(lower.score < results[1].score);
    }
}

#[test]
fn labeled_cognitive_case_has_full_recall_at_three() {
    let recommender = sample_recommender();
    let case = TestCase {
        query: Some("cognitive reasoning test".to_string()),
        job_level: Some(JobLevel::Entry),
        relevant_ids: [1, 5].iter().map(|&id| ItemId::from_u64(id)).collect(),
        description: None,
    };

    let report = evaluation::evaluate(&recommender, &[case]).unwrap();
    assert!((report.recall_at_k.values[0] - 1.0).abs() < 0.001);
}

#[test]
fn all_level_popularity_call_returns_opq32_first() {
    let recommender = sample_recommender();

    let results = recommender.recommend(None, Some(JobLevel::All), 5).unwrap();

    assert_eq!(results[0].item.name, "OPQ32");
    assert!((results[0].score - 9.0).abs() < f32::EPSILON);
}

#[test]
fn no_signal_call_falls_back_to_global_popularity() {
    let recommender = sample_recommender();

    let results = recommender.recommend(None, None, 5).unwrap();

    let ids: Vec<u64> = results.iter().map(|r| r.item.id.as_u64()).collect();
    // Popularity order: 2 (9.0), 1 (8.5), 5 (8.1), 3 (7.8), 4 (7.2).
    assert_eq!(ids, vec![2, 1, 5, 3, 4]);
}

#[test]
fn consensus_boost_raises_score_by_exactly_half() {
    let recommender = sample_recommender();

    let content_only = recommender
        .recommend(Some("cognitive reasoning test"), None, 5)
        .unwrap();
    let fused = recommender
        .recommend(Some("cognitive reasoning test"), Some(JobLevel::Entry), 5)
        .unwrap();

    // Verify Interactive matches both the query and the entry level.
    let similarity = content_only
        .iter()
        .find(|r| r.item.id.as_u64() == 1)
        .unwrap()
        .score;
    let boosted = fused
        .iter()
        .find(|r| r.item.id.as_u64() == 1)
        .unwrap()
        .score;

    assert!((boosted - (similarity + 0.5)).abs() < 1e-6);
    assert!(boosted > similarity);
}

#[test]
fn repeated_calls_return_identical_orderings() {
    let recommender = sample_recommender();

    let first = recommender
        .recommend(Some("cognitive reasoning test"), Some(JobLevel::Entry), 5)
        .unwrap();
    for _ in 0..10 {
        let again = recommender
            .recommend(Some("cognitive reasoning test"), Some(JobLevel::Entry), 5)
            .unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn insertion_order_does_not_affect_results() {
    let forward = sample_recommender();
    let mut reversed_items = datasets::sample_catalog();
    reversed_items.reverse();
    let reversed = Recommender::with_catalog(reversed_items).unwrap();

    for (query, level) in [
        (Some("cognitive reasoning test"), Some(JobLevel::Entry)),
        (Some("personality questionnaire"), None),
        (None, Some(JobLevel::Mid)),
        (None, None),
    ] {
        let a = forward.recommend(query, level, 5).unwrap();
        let b = reversed.recommend(query, level, 5).unwrap();
        assert_eq!(a, b, "ordering changed for query={query:?} level={level:?}");
    }
}

#[test]
fn empty_query_string_preserves_id_order() {
    let recommender = sample_recommender();

    let results = recommender.recommend(Some(""), None, 5).unwrap();

    let ids: Vec<u64> = results.iter().map(|r| r.item.id.as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn top_n_exceeding_catalog_returns_all_items() {
    let recommender = sample_recommender();

    let results = recommender
        .recommend(Some("cognitive reasoning test"), None, 50)
        .unwrap();
    assert_eq!(results.len(), 5);
}

#[test]
fn unmatched_job_level_yields_empty_results() {
    // A catalog with no senior-tagged and no all-tagged items.
    let items: Vec<_> = datasets::sample_catalog()
        .into_iter()
        .filter(|item| {
            !item.matches_level(JobLevel::Senior)
        })
        .collect();
    let recommender = Recommender::with_catalog(items).unwrap();

    let results = recommender.recommend(None, Some(JobLevel::Senior), 5).unwrap();
    assert!(results.is_empty());
}

#[test]
fn empty_test_suite_fails_with_configuration_error() {
    let recommender = sample_recommender();
    let result = evaluation::evaluate(&recommender, &[]);
    assert!(matches!(result, Err(RecommendError::Configuration(_))));
}

#[test]
fn sample_suite_evaluates_cleanly() {
    let recommender = sample_recommender();
    let report = evaluation::evaluate(&recommender, &datasets::sample_test_cases()).unwrap();

    assert_eq!(report.case_count, 5);
    assert!(report.precision_at_k.average > 0.0);
    assert!(report.recall_at_k.average > 0.0);
    assert!(report.map.average > 0.0);
    for value in report
        .precision_at_k
        .values
        .iter()
        .chain(&report.recall_at_k.values)
        .chain(&report.map.values)
    {
        assert!((0.0..=1.0).contains(value));
    }
}
