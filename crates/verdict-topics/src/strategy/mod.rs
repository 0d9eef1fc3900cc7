//! Clustering strategies.
//!
//! Two interchangeable strategies turn a [`Corpus`] into topic partitions:
//!
//! - **Vector**: TF-IDF vectors partitioned by k-means, labelled by the
//!   strongest centroid terms. Each review joins at most one partition. Only
//!   available with the `kmeans` feature.
//! - **Frequency**: the most frequent tokens become partition keys, and a
//!   review joins every partition whose key it contains. Always available.
//!
//! The engine prefers the vector strategy and falls back to frequency ranking
//! whenever it fails.

mod frequency;
#[cfg(feature = "kmeans")]
mod kmeans;

pub use frequency::FrequencyStrategy;
#[cfg(feature = "kmeans")]
pub use kmeans::VectorStrategy;

use crate::{ClusterError, Corpus, StrategyKind};

/// A labelled group of reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Topic label.
    pub label: String,
    /// Member review indices, ascending.
    pub members: Vec<usize>,
}

impl Partition {
    /// Creates a partition.
    pub fn new(label: impl Into<String>, members: Vec<usize>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }
}

/// Groups normalized documents into labelled topic partitions.
pub trait ClusterStrategy: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Partitions `corpus` into at most `max_clusters` groups.
    ///
    /// # Arguments
    ///
    /// * `corpus` - Normalized documents, one per review.
    /// * `max_clusters` - Upper bound on the number of partitions.
    /// * `top_terms` - Upper bound on the number of terms in each label.
    ///
    /// # Errors
    ///
    /// Returns an error when the strategy cannot handle this corpus. The
    /// caller is expected to fall back to another strategy.
    fn partition(
        &self,
        corpus: &Corpus,
        max_clusters: usize,
        top_terms: usize,
    ) -> Result<Vec<Partition>, ClusterError>;
}
