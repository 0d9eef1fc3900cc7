//! Reputation reports and the end-to-end assessment pipeline.

use serde::{Deserialize, Serialize};
use verdict_config::{ClusterSettings, ReputationSettings};
use verdict_topics::{
    ClusterParams, ClusterSet, DEFAULT_KEYWORD_LIMIT, KeywordWeight, ProsConsRules, ReviewRecord,
    SentimentCounts, TopicEngine, keyword_weights, pros_cons_from_clusters,
};

use crate::{SentimentPercentages, Tier, advise, average_rating, composite_score};

/// Everything a rendered report shows about a product's reputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationReport {
    /// Composite score, 0 to 100.
    pub score: u8,
    /// Recommendation tier for `score`.
    pub tier: Tier,
    /// Mean star rating, 0 when there are no reviews.
    pub average_rating: f64,
    /// Number of reviews.
    pub total: usize,
    /// Review counts by sentiment.
    pub sentiment: SentimentCounts,
    /// Sentiment shares in whole percent.
    pub percentages: SentimentPercentages,
    /// Well-received topics.
    pub pros: Vec<String>,
    /// Poorly-received topics.
    pub cons: Vec<String>,
    /// Advice sentences from the fired rules.
    pub advice: Vec<String>,
    /// Topic labels weighted by member count.
    pub keywords: Vec<KeywordWeight>,
}

impl ReputationReport {
    /// Builds a report.
    ///
    /// # Arguments
    ///
    /// * `reviews` - Every review of the product.
    /// * `ranked` - Ranked clusters, source of pros, cons and keywords.
    /// * `evidence` - Corpus-wide clusters, source of advice.
    /// * `settings` - Pros/cons thresholds and advice rules.
    pub fn compute(
        reviews: &[ReviewRecord],
        ranked: &ClusterSet,
        evidence: &ClusterSet,
        settings: &ReputationSettings,
    ) -> Self {
        let sentiment = SentimentCounts::of(reviews);
        let average_rating = average_rating(reviews);
        let score = composite_score(average_rating, sentiment.positive_ratio());
        let pros_cons = pros_cons_from_clusters(&ranked.clusters, &ProsConsRules::from(settings));

        Self {
            score,
            tier: Tier::from_score(score),
            average_rating,
            total: reviews.len(),
            sentiment,
            percentages: SentimentPercentages::from_counts(&sentiment),
            pros: pros_cons.pros,
            cons: pros_cons.cons,
            advice: advise(&evidence.clusters, &settings.advice),
            keywords: keyword_weights(&ranked.clusters, DEFAULT_KEYWORD_LIMIT),
        }
    }

    /// The score on a ten-point scale, one decimal.
    pub fn score_out_of_ten(&self) -> f64 {
        f64::from(self.score) / 10.0
    }

    /// The average rating rounded to whole stars.
    pub fn stars(&self) -> u8 {
        self.average_rating.round_ties_even().clamp(0.0, 5.0) as u8
    }
}

/// The full result of assessing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Ranked topic clusters.
    pub clusters: ClusterSet,
    /// Corpus-wide clusters with evidence samples.
    pub evidence: ClusterSet,
    /// The reputation report.
    pub report: ReputationReport,
}

/// Runs the whole pipeline: clustering, sentiment, pros/cons, score, advice.
///
/// Ranked clusters use `max_clusters`; the evidence clusters that drive
/// advice use `global_clusters`.
pub fn assess(
    engine: &TopicEngine,
    reviews: &[ReviewRecord],
    reputation: &ReputationSettings,
    clustering: &ClusterSettings,
) -> Insight {
    let clusters = engine.extract_clusters(reviews, clustering.max_clusters, clustering.top_terms);
    let evidence = engine.build_clusters(reviews, &ClusterParams::global(clustering));
    tracing::debug!(
        reviews = reviews.len(),
        ranked = clusters.len(),
        evidence = evidence.len(),
        strategy = %clusters.strategy,
        "assessed reviews"
    );
    let report = ReputationReport::compute(reviews, &clusters, &evidence, reputation);
    Insight {
        clusters,
        evidence,
        report,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use verdict_topics::StrategyKind;

    fn report(score: u8, average_rating: f64) -> ReputationReport {
        ReputationReport {
            score,
            tier: Tier::from_score(score),
            average_rating,
            total: 0,
            sentiment: SentimentCounts::default(),
            percentages: SentimentPercentages::default(),
            pros: Vec::new(),
            cons: Vec::new(),
            advice: Vec::new(),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn ten_point_scale() {
        assert_eq!(report(87, 4.4).score_out_of_ten(), 8.7);
        assert_eq!(report(100, 5.0).score_out_of_ten(), 10.0);
    }

    #[test]
    fn stars_round_half_to_even() {
        assert_eq!(report(0, 4.4).stars(), 4);
        assert_eq!(report(0, 4.6).stars(), 5);
        assert_eq!(report(0, 2.5).stars(), 2);
        assert_eq!(report(0, 0.0).stars(), 0);
    }

    #[test]
    fn empty_report() {
        let empty = ClusterSet::empty(StrategyKind::Frequency);
        let r = ReputationReport::compute(&[], &empty, &empty, &ReputationSettings::default());
        assert_eq!(r.score, 0);
        assert_eq!(r.tier, Tier::NotRecommended);
        assert_eq!(r.percentages, SentimentPercentages::default());
        assert!(r.pros.is_empty() && r.cons.is_empty() && r.advice.is_empty());
    }
}
