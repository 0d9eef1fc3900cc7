//! Topic cluster results.

use std::{fmt, slice};

use serde::{Deserialize, Serialize};

use crate::SentimentCounts;

/// Separator between terms in a multi-term cluster label.
pub const LABEL_SEPARATOR: &str = "·";

/// Which clustering strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// TF-IDF vectors partitioned by k-means.
    Vector,
    /// Frequency ranking of individual tokens.
    Frequency,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector => f.write_str("vector"),
            Self::Frequency => f.write_str("frequency"),
        }
    }
}

/// One discussed aspect of a product and how reviewers feel about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCluster {
    /// Canonical terms, joined with [`LABEL_SEPARATOR`].
    pub label: String,
    /// Member counts by sentiment.
    #[serde(flatten)]
    pub counts: SentimentCounts,
    /// Net sentiment score, present on ranked results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    /// Truncated sample texts from the earliest members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<String>,
}

impl TopicCluster {
    /// Number of member reviews.
    pub fn size(&self) -> usize {
        self.counts.total()
    }

    /// The individual terms of the label.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.label
            .split(LABEL_SEPARATOR)
            .filter(|term| !term.is_empty())
    }

    /// Whether `topic` is one of the label's terms.
    pub fn mentions(&self, topic: &str) -> bool {
        self.terms().any(|term| term == topic)
    }
}

/// The clusters from one clustering call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSet {
    /// Strategy that produced the clusters. Informational only.
    pub strategy: StrategyKind,
    /// Clusters, ranked by score or by frequency.
    pub clusters: Vec<TopicCluster>,
}

impl ClusterSet {
    /// An empty result.
    pub fn empty(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            clusters: Vec::new(),
        }
    }

    /// Number of clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether there are no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterates over the clusters in order.
    pub fn iter(&self) -> slice::Iter<'_, TopicCluster> {
        self.clusters.iter()
    }

    /// Cluster labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.clusters.iter().map(|c| c.label.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a TopicCluster;
    type IntoIter = slice::Iter<'a, TopicCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
