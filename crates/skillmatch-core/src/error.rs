//! Error types for skillmatch-core.
//!
//! The engine has exactly two failure modes that surface to callers:
//! invalid configuration (empty inputs, zero cutoffs) and use of the
//! vectorizer before it has been fit. Degenerate inputs with a defined
//! numeric fallback (empty query, no job-level match, empty relevant set)
//! are not errors and never appear here.

use thiserror::Error;

/// Errors surfaced by the recommendation and evaluation APIs.
#[derive(Debug, Clone, Error)]
pub enum RecommendError {
    /// Caller supplied an input the engine cannot work with: an empty
    /// catalog/corpus, an empty test-case suite, or a zero cutoff
    /// (`k = 0`, `top_n = 0`).
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The vectorizer has not been fit yet. The engine never auto-fits:
    /// a missing `refresh_catalog` call should fail loudly, not be
    /// papered over.
    #[error("Vectorizer not fitted; call refresh_catalog first")]
    NotFitted,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RecommendError>;
