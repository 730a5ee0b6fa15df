//! TF-IDF vectorizer and sparse vector similarity.

use super::stopwords::is_stopword;
use crate::error::{RecommendError, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

/// Minimum token length kept during tokenization.
///
/// Single characters are almost always noise (initials, stray digits)
/// and never carry ranking signal in assessment text.
const MIN_TOKEN_LEN: usize = 2;

/// Splits text into lowercase terms.
///
/// Terms are maximal runs of alphanumeric characters and underscores, so
/// compound skill tags like `logical_reasoning` survive as one term.
/// Stopwords and terms shorter than two characters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Sparse weighted term vector over a fitted vocabulary.
///
/// Keys are vocabulary indices, values are non-negative TF-IDF weights.
/// The map is ordered so iteration (and therefore every downstream
/// computation) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: BTreeMap<usize, f32>,
}

impl SparseVector {
    /// Builds a vector from (vocabulary index, weight) pairs, dropping
    /// zero weights.
    pub fn from_weights(weights: impl IntoIterator<Item = (usize, f32)>) -> Self {
        Self {
            weights: weights.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    /// Returns true if the vector has no non-zero weights.
    ///
    /// The zero vector arises naturally from an empty query or a query
    /// made entirely of out-of-vocabulary terms; it has similarity 0.0
    /// with everything.
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of non-zero weights.
    pub fn nnz(&self) -> usize {
        self.weights.len()
    }

    /// Dot product with another sparse vector.
    fn dot(&self, other: &SparseVector) -> f32 {
        // Iterate the smaller map, probe the larger one.
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };
        small
            .iter()
            .filter_map(|(idx, w)| large.get(idx).map(|v| w * v))
            .sum()
    }

    /// Euclidean norm.
    fn norm(&self) -> f32 {
        self.weights.values().map(|w| w * w).sum::<f32>().sqrt()
    }

    /// Cosine similarity with another vector, in `[0, 1]`.
    ///
    /// Returns 0.0 when either vector is zero rather than dividing by
    /// zero. Weights are non-negative so the raw cosine is already
    /// non-negative; the result is clamped anyway to guard against
    /// floating-point drift past 1.0.
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

/// TF-IDF vectorizer over a document corpus.
///
/// [`fit`](Self::fit) builds the vocabulary and IDF table from the
/// corpus and returns the per-document vectors;
/// [`transform`](Self::transform) projects arbitrary text onto the
/// fitted vocabulary. Out-of-vocabulary terms contribute nothing — an
/// unknown query term never fails, it simply adds no similarity.
///
/// Refitting replaces all state; the vectorizer must be refit whenever
/// the catalog changes.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    /// Term -> vocabulary index
    vocabulary: HashMap<String, usize>,
    /// IDF weight per vocabulary index
    idf: Vec<f32>,
    /// Number of documents the vectorizer was fit against
    document_count: usize,
}

impl TfidfVectorizer {
    /// Creates an unfitted vectorizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once [`fit`](Self::fit) has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.document_count > 0
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents in the fitted corpus.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Fits the vectorizer against a corpus and returns the TF-IDF
    /// vector for each document, in corpus order.
    ///
    /// IDF uses the smoothed formula `ln((1 + n) / (1 + df)) + 1`: a
    /// term in every document bottoms out at weight 1.0, a term unique
    /// to one document gets the largest weight.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Configuration`] if `corpus` is empty.
    #[instrument(skip_all, fields(documents = corpus.len()))]
    pub fn fit(&mut self, corpus: &[String]) -> Result<Vec<SparseVector>> {
        if corpus.is_empty() {
            return Err(RecommendError::Configuration(
                "cannot fit vectorizer on an empty corpus".to_string(),
            ));
        }

        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        // Vocabulary in first-seen order; document frequency per term.
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for terms in &tokenized {
            let mut seen: Vec<usize> = Vec::new();
            for term in terms {
                let idx = *vocabulary.entry(term.clone()).or_insert_with(|| {
                    doc_freq.push(0);
                    doc_freq.len() - 1
                });
                if !seen.contains(&idx) {
                    seen.push(idx);
                    doc_freq[idx] += 1;
                }
            }
        }

        let n = corpus.len() as f32;
        let idf: Vec<f32> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.document_count = corpus.len();

        debug!(
            vocabulary = self.vocabulary.len(),
            documents = self.document_count,
            "fitted tf-idf vectorizer"
        );

        let vectors = tokenized
            .iter()
            .map(|terms| self.weigh_terms(terms))
            .collect();
        Ok(vectors)
    }

    /// Projects text onto the fitted vocabulary.
    ///
    /// Terms absent from the vocabulary are ignored; an empty or
    /// entirely out-of-vocabulary text yields the zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NotFitted`] if called before a
    /// successful [`fit`](Self::fit).
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        if !self.is_fitted() {
            return Err(RecommendError::NotFitted);
        }
        Ok(self.weigh_terms(&tokenize(text)))
    }

    /// Computes TF-IDF weights for pre-tokenized terms.
    fn weigh_terms(&self, terms: &[String]) -> SparseVector {
        let mut tf: BTreeMap<usize, f32> = BTreeMap::new();
        for term in terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                *tf.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        SparseVector::from_weights(
            tf.into_iter().map(|(idx, count)| (idx, count * self.idf[idx])),
        )
    }
}
