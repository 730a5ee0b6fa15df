//! Evaluation framework for measuring recommendation quality.
//!
//! Standard Information Retrieval metrics plus a harness that replays a
//! labeled test suite through the recommender and averages the results.
//!
//! # Overview
//!
//! - `metrics`: precision@k, recall@k, and average precision over a
//!   ranked list and a relevant-id set
//! - `harness`: [`TestCase`], [`MetricsReport`], and the
//!   [`evaluate`] entry point (hybrid recommendations at `top_n = 5`,
//!   metrics at `k = 3`)
//! - `datasets`: the built-in sample catalog and its labeled cases
//!
//! # Example
//!
//! ```ignore
//! use skillmatch_core::evaluation::{self, datasets};
//! use skillmatch_core::Recommender;
//!
//! let recommender = Recommender::with_catalog(datasets::sample_catalog())?;
//! let report = evaluation::evaluate(&recommender, &datasets::sample_test_cases())?;
//! println!("MAP = {:.3}", report.map.average);
//! ```
//!
//! # Metrics Reference
//!
//! | Metric | Description |
//! |--------|-------------|
//! | P@k | Fraction of the top k that are relevant |
//! | R@k | Fraction of relevant items found in the top k |
//! | MAP | Mean of per-case average precision |

pub mod datasets;
pub mod harness;
pub mod metrics;

pub use harness::{evaluate, evaluate_with, MetricSeries, MetricsReport, TestCase};
pub use metrics::{average_precision, precision_at_k, recall_at_k};
