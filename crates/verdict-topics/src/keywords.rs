//! Keyword cloud weights.

use serde::{Deserialize, Serialize};

use crate::TopicCluster;

/// Default number of keywords in a cloud.
pub const DEFAULT_KEYWORD_LIMIT: usize = 12;

/// A cluster label weighted by how many reviews discuss it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    /// Cluster label.
    pub text: String,
    /// Member count.
    pub weight: usize,
}

/// Weights cluster labels by member count, largest first.
///
/// Unlabelled clusters are skipped and ties keep cluster order. At most
/// `limit` keywords are returned.
pub fn keyword_weights(clusters: &[TopicCluster], limit: usize) -> Vec<KeywordWeight> {
    let mut keywords: Vec<KeywordWeight> = clusters
        .iter()
        .filter(|cluster| !cluster.label.is_empty())
        .map(|cluster| KeywordWeight {
            text: cluster.label.clone(),
            weight: cluster.size(),
        })
        .collect();
    keywords.sort_by(|a, b| b.weight.cmp(&a.weight));
    keywords.truncate(limit);
    keywords
}
