//! Pros and cons derived from cluster sentiment.

use serde::{Deserialize, Serialize};
use verdict_config::ReputationSettings;

use crate::TopicCluster;

/// Thresholds for classifying a cluster as a pro or a con.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProsConsRules {
    /// Maximum labels per list.
    pub cap: usize,
    /// Minimum positive share for a pro.
    pub pro_ratio: f64,
    /// Minimum negative share for a con.
    pub con_ratio: f64,
}

impl Default for ProsConsRules {
    fn default() -> Self {
        Self::from(&ReputationSettings::default())
    }
}

impl From<&ReputationSettings> for ProsConsRules {
    fn from(settings: &ReputationSettings) -> Self {
        Self {
            cap: settings.pros_cons_cap,
            pro_ratio: settings.pro_ratio,
            con_ratio: settings.con_ratio,
        }
    }
}

/// Labels of the topics reviewers like and dislike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsCons {
    /// Well-received topics.
    pub pros: Vec<String>,
    /// Poorly-received topics.
    pub cons: Vec<String>,
}

/// Derives pros and cons from ranked clusters.
///
/// Clusters are visited in order. A cluster is a pro when its positive share
/// reaches `pro_ratio`, otherwise a con when its negative share reaches
/// `con_ratio`, each only while its list has room. A label never appears
/// twice, and never in both lists. Empty clusters are skipped.
pub fn pros_cons_from_clusters(clusters: &[TopicCluster], rules: &ProsConsRules) -> ProsCons {
    let mut result = ProsCons::default();
    for cluster in clusters {
        if result.pros.len() >= rules.cap && result.cons.len() >= rules.cap {
            break;
        }
        if cluster.size() == 0 {
            continue;
        }
        let label = &cluster.label;
        if result.pros.contains(label) || result.cons.contains(label) {
            continue;
        }
        if cluster.counts.positive_ratio() >= rules.pro_ratio {
            if result.pros.len() < rules.cap {
                result.pros.push(label.clone());
            }
        } else if cluster.counts.negative_ratio() >= rules.con_ratio
            && result.cons.len() < rules.cap
        {
            result.cons.push(label.clone());
        }
    }
    result
}
