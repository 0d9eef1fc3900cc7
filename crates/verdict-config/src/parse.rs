//! Configuration file parsing.
//!
//! Parses individual `.verdict.toml` files into intermediate `RawConfig` structures that keep
//! every field optional, so that partial files can be merged by precedence.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{AdviceRule, ConfigError, SegmentationMode, StrategyChoice};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Clustering section.
    pub clustering: Option<RawClusterSettings>,
    /// Reputation section.
    pub reputation: Option<RawReputationSettings>,
    /// Lexicon section.
    pub lexicon: Option<RawLexiconSettings>,
}

/// Raw clustering settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClusterSettings {
    /// Strategy selection.
    pub strategy: Option<StrategyChoice>,
    /// Maximum clusters for a single subject.
    pub max_clusters: Option<usize>,
    /// Maximum clusters for the global evidence view.
    pub global_clusters: Option<usize>,
    /// Terms per cluster label.
    #[serde(alias = "top_terms_per_label")]
    pub top_terms: Option<usize>,
    /// Evidence samples per cluster.
    pub evidence_cap: Option<usize>,
    /// Characters per evidence sample.
    pub evidence_chars: Option<usize>,
    /// k-means restarts.
    #[serde(alias = "n_init")]
    pub restarts: Option<usize>,
    /// k-means iteration cap.
    pub max_iterations: Option<u64>,
    /// k-means convergence tolerance.
    pub tolerance: Option<f64>,
    /// Fixed k-means seed.
    pub seed: Option<u64>,
}

/// Raw reputation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReputationSettings {
    /// Pros/cons list cap.
    pub pros_cons_cap: Option<usize>,
    /// Positive ratio needed for a pro.
    pub pro_ratio: Option<f64>,
    /// Negative ratio needed for a con.
    pub con_ratio: Option<f64>,
    /// Advice rules; replace the built-in set when present.
    pub advice: Option<Vec<AdviceRule>>,
}

/// Raw lexicon settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLexiconSettings {
    /// Segmentation mode.
    pub segmentation: Option<SegmentationMode>,
    /// Whether the English stopword list is loaded.
    pub english_stopwords: Option<bool>,
    /// Extra stopwords.
    pub stopwords: Option<Vec<String>>,
    /// Canonical token to alias (or list of aliases).
    #[serde_as(as = "Option<BTreeMap<_, OneOrMany<_>>>")]
    pub synonyms: Option<BTreeMap<String, Vec<String>>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Unreadable or unparsable files are not root configs; the error surfaces later when the
/// file is loaded for real.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    /// Parses a TOML snippet with a dummy path.
    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn empty_config_has_no_sections() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.clustering.is_none());
        assert!(config.reputation.is_none());
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn clustering_section() {
        let config = parse(
            r#"
[clustering]
strategy = "frequency"
max_clusters = 4
top_terms_per_label = 2
n_init = 12
seed = 7
"#,
        );
        let clustering = config.clustering.unwrap();
        assert_eq!(clustering.strategy, Some(StrategyChoice::Frequency));
        assert_eq!(clustering.max_clusters, Some(4));
        assert_eq!(clustering.top_terms, Some(2));
        assert_eq!(clustering.restarts, Some(12));
        assert_eq!(clustering.seed, Some(7));
        assert!(clustering.evidence_cap.is_none());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let result = parse_config_str(
            "[clustering]\nstrategy = \"spectral\"\n",
            Path::new("bad.toml"),
        );
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn advice_rules_parse_as_array_of_tables() {
        let config = parse(
            r#"
[[reputation.advice]]
topic = "battery"
threshold = 0.1
message = "Check battery reviews."

[[reputation.advice]]
topic = "price"
threshold = 0.4
message = "Wait for a sale."
"#,
        );
        let advice = config.reputation.unwrap().advice.unwrap();
        assert_eq!(advice.len(), 2);
        assert_eq!(advice[0], AdviceRule::new("battery", 0.1, "Check battery reviews."));
        assert_eq!(advice[1].topic, "price");
    }

    #[test]
    fn synonyms_accept_one_or_many() {
        let config = parse(
            r#"
[lexicon]
segmentation = "pattern"
stopwords = ["meh"]

[lexicon.synonyms]
logistics = ["courier", "parcel"]
price = "cost"
"#,
        );
        let lexicon = config.lexicon.unwrap();
        assert_eq!(lexicon.segmentation, Some(SegmentationMode::Pattern));
        assert_eq!(lexicon.stopwords, Some(vec!["meh".to_string()]));
        let synonyms = lexicon.synonyms.unwrap();
        assert_eq!(synonyms["logistics"], vec!["courier", "parcel"]);
        assert_eq!(synonyms["price"], vec!["cost"]);
    }

    #[test]
    fn wrong_type_is_an_error() {
        let result = parse_config_str(
            "[clustering]\nmax_clusters = \"many\"\n",
            Path::new("bad.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = parse("[clustering]\nmax_clusters = 3\nflavour = \"mint\"\n[extra]\nx = 1\n");
        assert_eq!(config.clustering.unwrap().max_clusters, Some(3));
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = parse_config_file(Path::new("/nonexistent/dir/.verdict.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn root_detection() {
        let dir = TestDir::new();
        let root = dir.create_root_config("a");
        let plain = dir.create_config("b");
        let broken = dir.create_config_with_content("c", "root = [[[");
        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&broken));
        assert!(!is_root_config(Path::new("/nonexistent/.verdict.toml")));
    }
}
