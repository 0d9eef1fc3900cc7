//! The topic engine: strategy selection and cluster assembly.

use verdict_config::{ClusterSettings, StrategyChoice};
use verdict_text::Normalizer;

#[cfg(feature = "kmeans")]
use crate::VectorStrategy;
use crate::{
    ClusterSet, ClusterStrategy, Corpus, FrequencyStrategy, Partition, ReviewRecord,
    SentimentCounts, StrategyKind, TopicCluster, select_samples,
};

/// Parameters for an evidence-carrying clustering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterParams {
    /// Upper bound on the number of clusters.
    pub max_clusters: usize,
    /// Upper bound on the number of terms per label.
    pub top_terms: usize,
    /// Samples kept per cluster.
    pub evidence_cap: usize,
    /// Characters kept per sample.
    pub evidence_chars: usize,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self::global(&ClusterSettings::default())
    }
}

impl ClusterParams {
    /// Parameters for corpus-wide clustering (`global_clusters`).
    pub fn global(settings: &ClusterSettings) -> Self {
        Self {
            max_clusters: settings.global_clusters,
            ..Self::product(settings)
        }
    }

    /// Parameters for clustering one product's reviews (`max_clusters`).
    pub fn product(settings: &ClusterSettings) -> Self {
        Self {
            max_clusters: settings.max_clusters,
            top_terms: settings.top_terms,
            evidence_cap: settings.evidence_cap,
            evidence_chars: settings.evidence_chars,
        }
    }
}

/// Groups reviews into topic clusters.
///
/// Capabilities are checked once at construction. When the vector strategy is
/// available it runs first, and any failure is logged and answered by the
/// frequency strategy instead. Callers never see a clustering error.
pub struct TopicEngine {
    /// Tokenizer shared by both strategies.
    normalizer: Normalizer,
    /// Preferred strategy, when available.
    primary: Option<Box<dyn ClusterStrategy>>,
    /// Always-available fallback.
    fallback: FrequencyStrategy,
}

impl TopicEngine {
    /// Creates an engine, selecting strategies from `settings`.
    pub fn new(normalizer: Normalizer, settings: &ClusterSettings) -> Self {
        let primary = match settings.strategy {
            StrategyChoice::Auto => vector_strategy(&normalizer, settings),
            StrategyChoice::Frequency => None,
        };
        Self {
            normalizer,
            primary,
            fallback: FrequencyStrategy::new(),
        }
    }

    /// Creates an engine that only uses frequency grouping.
    ///
    /// Results are fully deterministic.
    pub fn frequency_only(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            primary: None,
            fallback: FrequencyStrategy::new(),
        }
    }

    /// Creates an engine with an explicit primary strategy.
    pub fn with_primary(normalizer: Normalizer, primary: Box<dyn ClusterStrategy>) -> Self {
        Self {
            normalizer,
            primary: Some(primary),
            fallback: FrequencyStrategy::new(),
        }
    }

    /// The strategy tried first.
    pub fn preferred_strategy(&self) -> StrategyKind {
        self.primary
            .as_ref()
            .map_or_else(|| self.fallback.kind(), |primary| primary.kind())
    }

    /// The tokenizer in use.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Clusters reviews into ranked topics.
    ///
    /// Every cluster carries a net score and the result is sorted by score,
    /// highest first. Clusters carry no samples.
    ///
    /// # Arguments
    ///
    /// * `reviews` - Reviews to cluster.
    /// * `max_clusters` - Upper bound on the number of clusters.
    /// * `top_terms` - Upper bound on the number of terms per label.
    pub fn extract_clusters(
        &self,
        reviews: &[ReviewRecord],
        max_clusters: usize,
        top_terms: usize,
    ) -> ClusterSet {
        let (strategy, partitions) = self.partition(reviews, max_clusters, top_terms);
        let mut clusters: Vec<TopicCluster> = partitions
            .into_iter()
            .map(|partition| {
                let counts = SentimentCounts::tally(reviews, &partition.members);
                TopicCluster {
                    label: partition.label,
                    counts,
                    score: Some(counts.net_score()),
                    samples: Vec::new(),
                }
            })
            .collect();
        sort_by_score(&mut clusters);
        ClusterSet { strategy, clusters }
    }

    /// Clusters reviews into topics with evidence samples.
    ///
    /// Vector clusters are scored and sorted by score. Frequency clusters are
    /// left unscored, in frequency order.
    pub fn build_clusters(&self, reviews: &[ReviewRecord], params: &ClusterParams) -> ClusterSet {
        let (strategy, partitions) = self.partition(reviews, params.max_clusters, params.top_terms);
        let ranked = strategy == StrategyKind::Vector;
        let mut clusters: Vec<TopicCluster> = partitions
            .into_iter()
            .map(|partition| {
                let counts = SentimentCounts::tally(reviews, &partition.members);
                TopicCluster {
                    samples: select_samples(
                        reviews,
                        &partition.members,
                        params.evidence_cap,
                        params.evidence_chars,
                    ),
                    label: partition.label,
                    counts,
                    score: ranked.then(|| counts.net_score()),
                }
            })
            .collect();
        if ranked {
            sort_by_score(&mut clusters);
        }
        ClusterSet { strategy, clusters }
    }

    /// Normalizes reviews and runs the preferred strategy, falling back on
    /// failure.
    fn partition(
        &self,
        reviews: &[ReviewRecord],
        max_clusters: usize,
        top_terms: usize,
    ) -> (StrategyKind, Vec<Partition>) {
        if reviews.is_empty() || max_clusters == 0 {
            return (self.fallback.kind(), Vec::new());
        }
        let corpus = Corpus::build(&self.normalizer, reviews);

        if let Some(primary) = &self.primary {
            match primary.partition(&corpus, max_clusters, top_terms) {
                Ok(partitions) => return (primary.kind(), partitions),
                Err(e) => {
                    tracing::debug!(
                        strategy = %primary.kind(),
                        error = %e,
                        "primary clustering failed, using frequency grouping"
                    );
                }
            }
        }
        (
            self.fallback.kind(),
            self.fallback.group(&corpus, max_clusters),
        )
    }
}

/// Builds the vector strategy when k-means is compiled in.
#[cfg(feature = "kmeans")]
fn vector_strategy(
    normalizer: &Normalizer,
    settings: &ClusterSettings,
) -> Option<Box<dyn ClusterStrategy>> {
    Some(Box::new(VectorStrategy::new(
        settings,
        normalizer.synonyms().clone(),
    )))
}

/// Without k-means only frequency grouping is available.
#[cfg(not(feature = "kmeans"))]
fn vector_strategy(
    _normalizer: &Normalizer,
    _settings: &ClusterSettings,
) -> Option<Box<dyn ClusterStrategy>> {
    tracing::debug!("k-means support not compiled in, using frequency grouping");
    None
}

/// Stable sort by score, highest first.
fn sort_by_score(clusters: &mut [TopicCluster]) {
    clusters.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod test {
    use verdict_config::LexiconSettings;
    use verdict_text::{Segmenter, Stopwords, SynonymTable};

    use super::*;
    use crate::{ClusterError, Sentiment};

    /// A normalizer with only a couple of function words as stopwords.
    fn normalizer() -> Normalizer {
        let mut stopwords = Stopwords::empty();
        stopwords.extend(["was", "the"]);
        Normalizer::new(Segmenter::Pattern, stopwords, SynonymTable::builtin())
    }

    fn scenario_a() -> Vec<ReviewRecord> {
        vec![
            ReviewRecord::new("great quality, fast logistics", Sentiment::Positive, 5),
            ReviewRecord::new("packaging damaged", Sentiment::Negative, 2),
            ReviewRecord::new("price too high", Sentiment::Negative, 1),
        ]
    }

    /// A primary strategy that always fails.
    struct Broken;

    impl ClusterStrategy for Broken {
        fn kind(&self) -> StrategyKind {
            StrategyKind::Vector
        }

        fn partition(&self, _: &Corpus, _: usize, _: usize) -> Result<Vec<Partition>, ClusterError> {
            Err(ClusterError::Partition("unavailable".to_string()))
        }
    }

    #[test]
    fn scenario_a_ranked_fallback() {
        let engine = TopicEngine::frequency_only(Normalizer::default());
        let set = engine.extract_clusters(&scenario_a(), 3, 3);
        assert_eq!(set.strategy, StrategyKind::Frequency);
        assert_eq!(set.labels(), vec!["quality", "logistics", "packaging"]);
        let scores: Vec<Option<i32>> = set.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![Some(100), Some(100), Some(-50)]);
        for cluster in &set {
            assert_eq!(cluster.size(), 1);
        }
    }

    #[test]
    fn scenario_a_evidence_fallback() {
        let engine = TopicEngine::frequency_only(Normalizer::default());
        let set = engine.build_clusters(&scenario_a(), &ClusterParams {
            max_clusters: 4,
            ..ClusterParams::default()
        });
        assert_eq!(set.labels(), vec!["quality", "logistics", "packaging", "price"]);
        assert!(set.iter().all(|c| c.score.is_none()));
        assert_eq!(set.clusters[3].samples, vec!["price too high"]);
        assert_eq!(set.clusters[3].counts.negative, 1);
    }

    #[test]
    fn failing_primary_falls_back() {
        let engine = TopicEngine::with_primary(Normalizer::default(), Box::new(Broken));
        assert_eq!(engine.preferred_strategy(), StrategyKind::Vector);
        let set = engine.extract_clusters(&scenario_a(), 3, 3);
        assert_eq!(set.strategy, StrategyKind::Frequency);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        let engine = TopicEngine::new(normalizer(), &ClusterSettings::default());
        assert!(engine.extract_clusters(&[], 5, 3).is_empty());
        assert!(engine.build_clusters(&[], &ClusterParams::default()).is_empty());
    }

    #[test]
    fn blank_reviews_yield_no_clusters() {
        let engine = TopicEngine::new(normalizer(), &ClusterSettings::default());
        let reviews = vec![
            ReviewRecord::new("   ", Sentiment::Neutral, 3),
            ReviewRecord::new("the 100", Sentiment::Positive, 5),
        ];
        let set = engine.extract_clusters(&reviews, 5, 3);
        assert!(set.is_empty());
        assert_eq!(set.strategy, StrategyKind::Frequency);
    }

    #[test]
    fn zero_clusters_requested() {
        let engine = TopicEngine::frequency_only(normalizer());
        assert!(engine.extract_clusters(&scenario_a(), 0, 3).is_empty());
    }

    #[test]
    fn samples_are_capped_and_truncated() {
        let engine = TopicEngine::frequency_only(normalizer());
        let reviews: Vec<ReviewRecord> = (0..4)
            .map(|i| ReviewRecord::new(format!("shipping note {i}"), Sentiment::Neutral, 3))
            .collect();
        let params = ClusterParams {
            max_clusters: 1,
            top_terms: 3,
            evidence_cap: 2,
            evidence_chars: 8,
        };
        let set = engine.build_clusters(&reviews, &params);
        assert_eq!(set.labels(), vec!["logistics"]);
        assert_eq!(set.clusters[0].samples, vec!["shipping", "shipping"]);
        assert_eq!(set.clusters[0].size(), 4);
    }

    #[test]
    fn frequency_choice_disables_primary() {
        let settings = ClusterSettings {
            strategy: StrategyChoice::Frequency,
            ..ClusterSettings::default()
        };
        let engine = TopicEngine::new(Normalizer::from_settings(&LexiconSettings::default()), &settings);
        assert_eq!(engine.preferred_strategy(), StrategyKind::Frequency);
    }

    #[cfg(feature = "kmeans")]
    #[test]
    fn vector_clusters_are_ranked_with_samples() {
        let settings = ClusterSettings {
            seed: Some(11),
            ..ClusterSettings::default()
        };
        let engine = TopicEngine::new(normalizer(), &settings);
        assert_eq!(engine.preferred_strategy(), StrategyKind::Vector);
        let reviews = vec![
            ReviewRecord::new("shipping slow", Sentiment::Negative, 2),
            ReviewRecord::new("quality excellent", Sentiment::Positive, 5),
            ReviewRecord::new("shipping slow", Sentiment::Negative, 1),
            ReviewRecord::new("quality excellent", Sentiment::Positive, 5),
        ];
        let set = engine.build_clusters(&reviews, &ClusterParams {
            max_clusters: 2,
            ..ClusterParams::default()
        });
        assert_eq!(set.strategy, StrategyKind::Vector);
        assert_eq!(set.len(), 2);
        assert_eq!(set.clusters[0].score, Some(100));
        assert_eq!(set.clusters[1].score, Some(-50));
        assert!(set.clusters[0].mentions("quality"));
        assert!(set.clusters[1].mentions("logistics"));
        assert_eq!(set.clusters[1].samples.len(), 2);
    }
}
