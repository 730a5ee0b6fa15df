//! Evaluation harness: drives the recommender over a labeled test suite
//! and aggregates ranking-quality metrics.

use super::metrics::{average_precision, precision_at_k, recall_at_k};
use crate::catalog::{ItemId, JobLevel};
use crate::config::{EVAL_K, EVAL_TOP_N};
use crate::error::{RecommendError, Result};
use crate::rank::ScoredItem;
use crate::recommender::Recommender;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// A labeled evaluation case: the request to replay and the ids
/// considered ground-truth relevant for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Free-text query, if the case exercises content ranking
    pub query: Option<String>,
    /// Job level, if the case exercises popularity ranking
    pub job_level: Option<JobLevel>,
    /// Ground-truth relevant item ids
    pub relevant_ids: BTreeSet<ItemId>,
    /// Human-readable note about what the case checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-metric value sequence with its average.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSeries {
    /// One value per test case, in suite order
    pub values: Vec<f64>,
    /// Arithmetic mean of `values`
    pub average: f64,
}

impl MetricSeries {
    fn from_values(values: Vec<f64>) -> Self {
        // The harness rejects empty suites before building any series.
        let average = values.iter().sum::<f64>() / values.len() as f64;
        Self { values, average }
    }
}

/// Ranking-quality report for one evaluation run.
///
/// Created fresh per run and discarded after reporting; nothing in the
/// engine retains it.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Cutoff used for precision@k and recall@k
    pub k: usize,
    /// Recommendations requested per case
    pub top_n: usize,
    /// Number of test cases evaluated
    pub case_count: usize,
    /// Precision@k per case plus average
    pub precision_at_k: MetricSeries,
    /// Recall@k per case plus average
    pub recall_at_k: MetricSeries,
    /// Average precision per case; the average of this series is MAP
    pub map: MetricSeries,
}

/// Evaluates the recommender against a labeled test suite using the
/// standard configuration (`top_n = 5`, `k = 3`).
///
/// # Errors
///
/// Returns [`RecommendError::Configuration`] if `test_cases` is empty
/// (averaging over zero cases is undefined), and propagates any
/// recommendation failure (e.g. [`RecommendError::NotFitted`]).
pub fn evaluate(recommender: &Recommender, test_cases: &[TestCase]) -> Result<MetricsReport> {
    evaluate_with(recommender, test_cases, EVAL_TOP_N, EVAL_K)
}

/// Evaluates with explicit `top_n` and `k`.
///
/// # Errors
///
/// As [`evaluate`], plus [`RecommendError::Configuration`] when `top_n`
/// or `k` is 0.
#[instrument(skip(recommender, test_cases), fields(cases = test_cases.len()))]
pub fn evaluate_with(
    recommender: &Recommender,
    test_cases: &[TestCase],
    top_n: usize,
    k: usize,
) -> Result<MetricsReport> {
    if test_cases.is_empty() {
        return Err(RecommendError::Configuration(
            "cannot evaluate an empty test-case suite".to_string(),
        ));
    }
    if k == 0 {
        return Err(RecommendError::Configuration(
            "evaluation requires k > 0".to_string(),
        ));
    }

    let mut precision_values = Vec::with_capacity(test_cases.len());
    let mut recall_values = Vec::with_capacity(test_cases.len());
    let mut map_values = Vec::with_capacity(test_cases.len());

    for case in test_cases {
        let recommendations =
            recommender.recommend(case.query.as_deref(), case.job_level, top_n)?;
        let ranked: Vec<ScoredItem> = recommendations
            .iter()
            .map(|rec| ScoredItem::new(rec.item.id, rec.score))
            .collect();

        let precision = precision_at_k(&ranked, &case.relevant_ids, k)?;
        let recall = recall_at_k(&ranked, &case.relevant_ids, k)?;
        let ap = average_precision(&ranked, &case.relevant_ids);

        debug!(
            query = case.query.as_deref().unwrap_or(""),
            precision, recall, ap, "evaluated test case"
        );

        precision_values.push(precision);
        recall_values.push(recall);
        map_values.push(ap);
    }

    Ok(MetricsReport {
        k,
        top_n,
        case_count: test_cases.len(),
        precision_at_k: MetricSeries::from_values(precision_values),
        recall_at_k: MetricSeries::from_values(recall_values),
        map: MetricSeries::from_values(map_values),
    })
}
