//! Catalog data model: assessment items, job levels, and immutable
//! catalog snapshots.
//!
//! A [`CatalogSnapshot`] pairs the item records with a fitted
//! [`TfidfVectorizer`](crate::vectorize::TfidfVectorizer) and the
//! per-item document vectors. Snapshots are built once and never
//! mutated; refreshing the catalog builds a new snapshot off to the
//! side and swaps it in (see [`Recommender`](crate::recommender::Recommender)),
//! so a ranking call always sees a consistent (items, vectors) pair.

use crate::error::{RecommendError, Result};
use crate::vectorize::{SparseVector, TfidfVectorizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Unique assessment item identifier.
///
/// Ordering on `ItemId` is the deterministic tie-break used by every
/// ranker: equal-score items are returned in ascending id order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates an ItemId from a raw u64 value.
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value of this id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job level tag attached to assessment items.
///
/// `All` is a wildcard: an item tagged `All` matches every level-based
/// query. The match logic lives in [`AssessmentItem::matches_level`] so
/// the wildcard rule exists in exactly one place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Entry,
    Mid,
    Senior,
    All,
}

impl JobLevel {
    /// Returns the lowercase tag used in catalog data and queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::All => "all",
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobLevel {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "entry" => Ok(JobLevel::Entry),
            "mid" => Ok(JobLevel::Mid),
            "senior" => Ok(JobLevel::Senior),
            "all" => Ok(JobLevel::All),
            other => Err(RecommendError::Configuration(format!(
                "unknown job level: {other}"
            ))),
        }
    }
}

/// Immutable assessment record.
///
/// Items are supplied fully populated by the catalog source and never
/// mutated after load. A missing `job_levels` set means the item matches
/// no level-based query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    /// Unique item key within a catalog snapshot
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Ordered skill tags
    pub skills: Vec<String>,
    /// Job levels this item targets (empty = matches nothing)
    #[serde(default)]
    pub job_levels: BTreeSet<JobLevel>,
    /// Expected completion time in minutes
    pub duration_minutes: u32,
    /// Popularity signal, higher = more popular
    pub popularity: f32,
}

impl AssessmentItem {
    /// Returns true if this item targets the given job level.
    ///
    /// An item matches when its level set contains the queried tag, or
    /// when it is tagged [`JobLevel::All`]. An item with an empty level
    /// set matches nothing.
    pub fn matches_level(&self, level: JobLevel) -> bool {
        self.job_levels.contains(&level) || self.job_levels.contains(&JobLevel::All)
    }

    /// Builds the corpus document for this item: name, description,
    /// skills, and job levels concatenated into one text blob.
    ///
    /// This derived text exists only to fit and query the vectorizer;
    /// it is regenerated on every catalog refresh and never persisted.
    pub fn corpus_document(&self) -> String {
        let mut doc = String::with_capacity(
            self.name.len() + self.description.len() + 64,
        );
        doc.push_str(&self.name);
        doc.push(' ');
        doc.push_str(&self.description);
        for skill in &self.skills {
            doc.push(' ');
            doc.push_str(skill);
        }
        for level in &self.job_levels {
            doc.push(' ');
            doc.push_str(level.as_str());
        }
        doc
    }
}

/// Immutable catalog snapshot: items, fitted vectorizer, and the item
/// vectors produced by the fit.
///
/// Items are stored in ascending id order so that stable iteration and
/// tie-breaking fall out of the layout. The three fields are built
/// together and must never be recombined across snapshots.
#[derive(Debug)]
pub struct CatalogSnapshot {
    items: Vec<AssessmentItem>,
    vectorizer: TfidfVectorizer,
    item_vectors: Vec<SparseVector>,
}

impl CatalogSnapshot {
    /// Builds a snapshot from item records: sorts by id, derives the
    /// corpus documents, and fits the vectorizer against them.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Configuration`] if `items` is empty or
    /// contains duplicate ids.
    pub fn build(mut items: Vec<AssessmentItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(RecommendError::Configuration(
                "cannot build catalog from an empty item list".to_string(),
            ));
        }

        items.sort_by_key(|item| item.id);
        if let Some(dup) = items.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(RecommendError::Configuration(format!(
                "duplicate item id in catalog: {}",
                dup[0].id
            )));
        }

        let corpus: Vec<String> = items.iter().map(AssessmentItem::corpus_document).collect();
        let mut vectorizer = TfidfVectorizer::new();
        let item_vectors = vectorizer.fit(&corpus)?;

        Ok(Self {
            items,
            vectorizer,
            item_vectors,
        })
    }

    /// Items in ascending id order.
    pub fn items(&self) -> &[AssessmentItem] {
        &self.items
    }

    /// Fitted item vectors, parallel to [`items`](Self::items).
    pub fn item_vectors(&self) -> &[SparseVector] {
        &self.item_vectors
    }

    /// The vectorizer fitted against this snapshot's corpus.
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Looks up an item by id (binary search over the sorted items).
    pub fn get(&self, id: ItemId) -> Option<&AssessmentItem> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .map(|idx| &self.items[idx])
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the snapshot holds no items.
    ///
    /// Always false in practice: [`build`](Self::build) rejects empty
    /// item lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
