//! Rule-based buyer advice from per-topic negative ratios.

use verdict_config::AdviceRule;
use verdict_topics::{SentimentCounts, TopicCluster};

/// Negative share of the reviews in clusters that mention `topic`.
///
/// Counts are pooled across every cluster whose label contains `topic` as a
/// term. This departs from taking the ratio of the first matching cluster
/// with a non-zero ratio: a topic split over several clusters is judged on
/// all of its reviews. Returns 0 when no cluster matches.
pub fn topic_negative_ratio(clusters: &[TopicCluster], topic: &str) -> f64 {
    let mut pooled = SentimentCounts::default();
    for cluster in clusters.iter().filter(|cluster| cluster.mentions(topic)) {
        pooled.positive += cluster.counts.positive;
        pooled.negative += cluster.counts.negative;
        pooled.neutral += cluster.counts.neutral;
    }
    pooled.negative_ratio()
}

/// Messages of every rule whose topic's negative ratio exceeds its threshold.
///
/// Rules are independent and fire in rule order.
pub fn advise(clusters: &[TopicCluster], rules: &[AdviceRule]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| {
            let ratio = topic_negative_ratio(clusters, &rule.topic);
            let fires = ratio > rule.threshold;
            if fires {
                tracing::debug!(topic = %rule.topic, ratio, threshold = rule.threshold, "advice rule fired");
            }
            fires
        })
        .map(|rule| rule.message.clone())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn cluster(label: &str, positive: usize, negative: usize) -> TopicCluster {
        TopicCluster {
            label: label.to_string(),
            counts: SentimentCounts {
                positive,
                negative,
                neutral: 0,
            },
            score: None,
            samples: Vec::new(),
        }
    }

    #[test]
    fn ratio_pools_matching_clusters() {
        let clusters = vec![
            cluster("logistics·slow", 1, 1),
            cluster("price", 5, 0),
            cluster("fast·logistics", 2, 0),
        ];
        assert_eq!(topic_negative_ratio(&clusters, "logistics"), 0.25);
        assert_eq!(topic_negative_ratio(&clusters, "price"), 0.0);
    }

    #[test]
    fn unmatched_topic_has_zero_ratio() {
        assert_eq!(topic_negative_ratio(&[cluster("price", 0, 3)], "after-sales"), 0.0);
        assert_eq!(topic_negative_ratio(&[], "price"), 0.0);
    }

    #[test]
    fn threshold_is_strict() {
        let rules = vec![AdviceRule::new("price", 0.25, "watch price")];
        // Exactly 0.25 does not fire.
        assert!(advise(&[cluster("price", 3, 1)], &rules).is_empty());
        assert_eq!(advise(&[cluster("price", 2, 1)], &rules), vec!["watch price"]);
    }

    #[test]
    fn all_applicable_rules_fire() {
        let clusters = vec![cluster("packaging", 0, 1), cluster("logistics", 0, 1)];
        let advice = advise(&clusters, &AdviceRule::builtin());
        assert_eq!(advice.len(), 2);
    }

    #[test]
    fn positive_topics_stay_silent() {
        let clusters = vec![cluster("price·logistics·packaging", 10, 0)];
        assert!(advise(&clusters, &AdviceRule::builtin()).is_empty());
    }
}
