//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::PathBuf;

use crate::{
    ClusterSettings, Config, ConfigError, LexiconSettings, ReputationSettings,
    parse::{RawClusterSettings, RawConfig, RawLexiconSettings, RawReputationSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Advice rules: the highest-precedence file that defines any replaces the whole list
/// - Extra stopwords: union across all files
/// - Synonyms: merged by canonical token, first definition wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut clustering = ClusterSettings::default();
    let mut reputation = ReputationSettings::default();
    let mut lexicon = LexiconSettings::default();

    // Lowest precedence first so that closer files overwrite.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(section) = &raw.clustering {
            apply_clustering(&mut clustering, section);
        }
        if let Some(section) = &raw.reputation {
            apply_reputation(&mut reputation, section);
        }
        if let Some(section) = &raw.lexicon {
            apply_lexicon(&mut lexicon, section);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Ok(Config {
        clustering,
        reputation,
        lexicon,
        config_root,
    })
}

/// Applies raw clustering settings, overwriting any present values.
fn apply_clustering(result: &mut ClusterSettings, raw: &RawClusterSettings) {
    if let Some(v) = raw.strategy {
        result.strategy = v;
    }
    if let Some(v) = raw.max_clusters {
        result.max_clusters = v;
    }
    if let Some(v) = raw.global_clusters {
        result.global_clusters = v;
    }
    if let Some(v) = raw.top_terms {
        result.top_terms = v;
    }
    if let Some(v) = raw.evidence_cap {
        result.evidence_cap = v;
    }
    if let Some(v) = raw.evidence_chars {
        result.evidence_chars = v;
    }
    if let Some(v) = raw.restarts {
        result.restarts = v;
    }
    if let Some(v) = raw.max_iterations {
        result.max_iterations = v;
    }
    if let Some(v) = raw.tolerance {
        result.tolerance = v;
    }
    if raw.seed.is_some() {
        result.seed = raw.seed;
    }
}

/// Applies raw reputation settings.
fn apply_reputation(result: &mut ReputationSettings, raw: &RawReputationSettings) {
    if let Some(v) = raw.pros_cons_cap {
        result.pros_cons_cap = v;
    }
    if let Some(v) = raw.pro_ratio {
        result.pro_ratio = v;
    }
    if let Some(v) = raw.con_ratio {
        result.con_ratio = v;
    }
    if let Some(rules) = &raw.advice {
        result.advice = rules.clone();
    }
}

/// Applies raw lexicon settings.
fn apply_lexicon(result: &mut LexiconSettings, raw: &RawLexiconSettings) {
    if let Some(v) = raw.segmentation {
        result.segmentation = v;
    }
    if let Some(v) = raw.english_stopwords {
        result.english_stopwords = v;
    }
    if let Some(words) = &raw.stopwords {
        for word in words {
            if !result.stopwords.contains(word) {
                result.stopwords.push(word.clone());
            }
        }
    }
    if let Some(synonyms) = &raw.synonyms {
        for (canonical, aliases) in synonyms {
            result
                .synonyms
                .insert(canonical.clone(), aliases.clone());
        }
    }
}
