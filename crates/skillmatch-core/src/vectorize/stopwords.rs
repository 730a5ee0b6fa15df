//! Fixed English stopword list.
//!
//! Terms on this list carry no ranking signal and are dropped during
//! tokenization, both when fitting the corpus and when transforming a
//! query. The list is sorted so membership checks are a binary search.

/// English stopwords, sorted ascending.
static STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "cannot", "could", "did", "do", "does", "doing", "down", "during",
    "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours",
];

/// Returns true if `term` is on the stopword list.
///
/// Expects an already-lowercased term, which is what
/// [`tokenize`](super::tokenize) produces.
pub fn is_stopword(term: &str) -> bool {
    STOPWORDS.binary_search(&term).is_ok()
}
