//! # Skillmatch Core
//!
//! Recommendation engine for an assessment catalog: TF-IDF content
//! ranking, popularity ranking with job-level filtering, hybrid fusion
//! with deterministic tie-breaking, and an evaluation harness with
//! standard IR metrics.
//!
//! The whole pipeline is synchronous and in-memory. Catalog loading and
//! result presentation are the caller's concern; this crate takes item
//! records in and hands ranked `(item, score)` sequences back.
//!
//! ## Modules
//!
//! - [`catalog`] - Item records, job levels, and immutable catalog snapshots
//! - [`vectorize`] - TF-IDF vectorizer and cosine similarity
//! - [`rank`] - Content, popularity, and hybrid rankers
//! - [`recommender`] - The [`Recommender`] facade with the refresh lifecycle
//! - [`evaluation`] - Ranking-quality metrics, harness, and sample dataset
//! - [`config`] - Ranking and evaluation constants
//! - [`error`] - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod rank;
pub mod recommender;
pub mod vectorize;

pub use catalog::{AssessmentItem, CatalogSnapshot, ItemId, JobLevel};
pub use error::{RecommendError, Result};
pub use recommender::{Recommendation, Recommender};
