//! Frequency-ranked topic grouping.

use std::collections::HashMap;

use super::{ClusterStrategy, Partition};
use crate::{ClusterError, Corpus, StrategyKind};

/// Uses the most frequent tokens as topics.
///
/// Tokens are ranked by total occurrences across the corpus, ties broken by
/// first appearance. Membership is non-exclusive: a review mentioning two
/// top tokens counts toward both topics. The result depends only on the
/// corpus, so repeated runs are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Partitions `corpus` by its `max_clusters` most frequent tokens.
    ///
    /// Never fails; an empty corpus yields no partitions.
    pub fn group(&self, corpus: &Corpus, max_clusters: usize) -> Vec<Partition> {
        rank_tokens(corpus)
            .into_iter()
            .take(max_clusters)
            .map(|token| Partition::new(token, corpus.containing(token)))
            .collect()
    }
}

impl ClusterStrategy for FrequencyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Frequency
    }

    fn partition(
        &self,
        corpus: &Corpus,
        max_clusters: usize,
        _top_terms: usize,
    ) -> Result<Vec<Partition>, ClusterError> {
        Ok(self.group(corpus, max_clusters))
    }
}

/// Distinct tokens by descending frequency, ties in first-seen order.
fn rank_tokens(corpus: &Corpus) -> Vec<&str> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for token in corpus.documents().iter().flat_map(|doc| doc.tokens()) {
        let slot = *slots.entry(token.as_str()).or_insert_with(|| {
            order.push((token.as_str(), 0));
            order.len() - 1
        });
        if let Some((_, count)) = order.get_mut(slot) {
            *count += 1;
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().map(|(token, _)| token).collect()
}
