//! Configuration validation.
//!
//! Reports settings that load fine but would make the engine behave oddly.

use std::fmt;

use crate::{ClusterSettings, Config, LexiconSettings, ReputationSettings};

/// Restart count below which k-means results become noticeably unstable.
const MIN_STABLE_RESTARTS: usize = 10;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A cluster count is zero, so no topics would ever be produced.
    ZeroClusters {
        /// Dotted key of the setting.
        key: &'static str,
    },
    /// Cluster labels would have no terms.
    ZeroTopTerms,
    /// A ratio threshold lies outside `[0, 1]`.
    RatioOutOfRange {
        /// Dotted key or rule description.
        key: String,
        /// The configured value.
        value: f64,
    },
    /// Too few k-means restarts for stable results.
    FewRestarts {
        /// The configured restart count.
        restarts: usize,
    },
    /// A synonym canonical token is also listed as a stopword; the stopword is ignored.
    CanonicalIsStopword {
        /// The canonical token.
        token: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroClusters { key } => write!(f, "{key} is 0, no topics will be produced"),
            Self::ZeroTopTerms => write!(f, "clustering.top_terms is 0, labels will be empty"),
            Self::RatioOutOfRange { key, value } => {
                write!(f, "{key} = {value} is outside the range 0.0-1.0")
            }
            Self::FewRestarts { restarts } => write!(
                f,
                "clustering.restarts = {restarts} is below {MIN_STABLE_RESTARTS}, results may vary between runs"
            ),
            Self::CanonicalIsStopword { token } => {
                write!(
                    f,
                    "synonym target '{token}' is also a configured stopword; the stopword is ignored"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = validate_clustering(&config.clustering);
    warnings.extend(validate_reputation(&config.reputation));
    warnings.extend(validate_lexicon(&config.lexicon));
    for warning in &warnings {
        tracing::warn!(%warning, "configuration warning");
    }
    warnings
}

/// Checks cluster counts, label size and restart count.
fn validate_clustering(settings: &ClusterSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if settings.max_clusters == 0 {
        warnings.push(ConfigWarning::ZeroClusters {
            key: "clustering.max_clusters",
        });
    }
    if settings.global_clusters == 0 {
        warnings.push(ConfigWarning::ZeroClusters {
            key: "clustering.global_clusters",
        });
    }
    if settings.top_terms == 0 {
        warnings.push(ConfigWarning::ZeroTopTerms);
    }
    if settings.restarts < MIN_STABLE_RESTARTS {
        warnings.push(ConfigWarning::FewRestarts {
            restarts: settings.restarts,
        });
    }
    warnings
}

/// Checks that every ratio threshold is a proportion.
fn validate_reputation(settings: &ReputationSettings) -> Vec<ConfigWarning> {
    let mut checks = vec![
        ("reputation.pro_ratio".to_string(), settings.pro_ratio),
        ("reputation.con_ratio".to_string(), settings.con_ratio),
    ];
    checks.extend(
        settings
            .advice
            .iter()
            .map(|rule| (format!("advice threshold for '{}'", rule.topic), rule.threshold)),
    );

    checks
        .into_iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(key, value)| ConfigWarning::RatioOutOfRange { key, value })
        .collect()
}

/// Checks for synonym targets that the stopword list would discard.
fn validate_lexicon(settings: &LexiconSettings) -> Vec<ConfigWarning> {
    settings
        .synonyms
        .keys()
        .filter(|canonical| {
            settings
                .stopwords
                .iter()
                .any(|s| s.eq_ignore_ascii_case(canonical))
        })
        .map(|token| ConfigWarning::CanonicalIsStopword {
            token: token.clone(),
        })
        .collect()
}
