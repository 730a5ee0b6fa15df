//! Text vectorization: TF-IDF over a catalog corpus.
//!
//! This module turns free text into a sparse weighted representation and
//! scores similarity between two such representations:
//!
//! - `stopwords`: fixed English stopword list dropped during tokenization
//! - `tfidf`: the [`TfidfVectorizer`] (fit/transform) and [`SparseVector`]
//!   with cosine similarity
//!
//! # Algorithm
//!
//! **TF-IDF weighting**:
//! - Term Frequency (TF): raw count of a term within one document
//! - Inverse Document Frequency (IDF): `ln((1 + n) / (1 + df)) + 1`,
//!   smoothed so terms present in every document are down-weighted and
//!   terms unique to one document are up-weighted
//!
//! **Cosine similarity**:
//! - `sim(a, b) = a · b / (‖a‖ ‖b‖)`, defined as 0.0 when either vector
//!   is zero (e.g. a query made entirely of out-of-vocabulary words)
//!
//! # Usage
//!
//! ```ignore
//! use skillmatch_core::vectorize::TfidfVectorizer;
//!
//! let mut vectorizer = TfidfVectorizer::new();
//! let docs = vectorizer.fit(&corpus)?;
//! let query = vectorizer.transform("cognitive reasoning test")?;
//! let score = query.cosine_similarity(&docs[0]);
//! ```

mod stopwords;
mod tfidf;

pub use stopwords::is_stopword;
pub use tfidf::{tokenize, SparseVector, TfidfVectorizer};
