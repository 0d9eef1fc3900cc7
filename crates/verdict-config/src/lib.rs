//! Configuration system for verdict.
//!
//! verdict uses TOML configuration files named `.verdict.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.verdict.toml` files found, then loading `~/.verdict.toml` as the global config with lowest
//! precedence.
//!
//! Every section is optional. An empty configuration yields the engine defaults: five topic
//! clusters per subject, eight for the global evidence view, three label terms, two evidence
//! samples of at most 200 characters, and three pros/cons.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawClusterSettings, RawConfig, RawLexiconSettings, RawReputationSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for verdict.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.verdict.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Topic clustering settings.
    pub clustering: ClusterSettings,
    /// Reputation scoring and advice settings.
    pub reputation: ReputationSettings,
    /// Tokenizer lexicon settings.
    pub lexicon: LexiconSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.verdict.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.verdict.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.verdict.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        tracing::debug!(files = parsed.len(), "merging configuration files");
        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.verdict.toml` file, so it can be copied into one.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            clustering: &self.clustering,
            reputation: &self.reputation,
            lexicon: &self.lexicon,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Borrowed view of the settings sections used for TOML rendering.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Clustering section.
    clustering: &'a ClusterSettings,
    /// Reputation section.
    reputation: &'a ReputationSettings,
    /// Lexicon section.
    lexicon: &'a LexiconSettings,
}

/// Which clustering strategy the engine should attempt first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    /// Vector-space clustering when available, frequency grouping otherwise.
    #[default]
    Auto,
    /// Always use frequency grouping.
    Frequency,
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Frequency => write!(f, "frequency"),
        }
    }
}

impl str::FromStr for StrategyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "kmeans" | "vector" => Ok(Self::Auto),
            "frequency" | "freq" => Ok(Self::Frequency),
            _ => Err(format!(
                "unknown strategy '{s}', expected one of: auto, frequency"
            )),
        }
    }
}

/// Word segmentation mode for the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Unicode word-boundary segmentation, when compiled in.
    #[default]
    Unicode,
    /// Split on runs of alphanumerics, underscores and hyphens.
    Pattern,
}

/// Settings for topic clustering.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterSettings {
    /// Strategy selection.
    pub strategy: StrategyChoice,
    /// Maximum clusters for a single subject's reviews.
    pub max_clusters: usize,
    /// Maximum clusters for the global evidence view.
    pub global_clusters: usize,
    /// Number of terms joined into a cluster label.
    pub top_terms: usize,
    /// Evidence samples kept per cluster.
    pub evidence_cap: usize,
    /// Maximum characters per evidence sample.
    pub evidence_chars: usize,
    /// Number of k-means restarts; the lowest-inertia run is kept.
    pub restarts: usize,
    /// Iteration cap for a single k-means run.
    pub max_iterations: u64,
    /// Convergence tolerance for centroid movement.
    pub tolerance: f64,
    /// Fixed seed for k-means initialization. Unset means a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            strategy: StrategyChoice::Auto,
            max_clusters: 5,
            global_clusters: 8,
            top_terms: 3,
            evidence_cap: 2,
            evidence_chars: 200,
            restarts: 10,
            max_iterations: 300,
            tolerance: 1e-4,
            seed: None,
        }
    }
}

/// A rule that emits advice when a topic's negative ratio exceeds a threshold.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdviceRule {
    /// Canonical topic token matched against cluster labels.
    pub topic: String,
    /// Strict lower bound on the negative ratio that triggers the rule.
    pub threshold: f64,
    /// Advice sentence emitted when the rule fires.
    pub message: String,
}

impl AdviceRule {
    /// Creates a new advice rule.
    pub fn new(topic: impl Into<String>, threshold: f64, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            threshold,
            message: message.into(),
        }
    }

    /// Returns the built-in rules for the designated risk topics.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new(
                "price",
                0.25,
                "Watch pricing and promotion timing, and compare value against similar products.",
            ),
            Self::new(
                "logistics",
                0.20,
                "Choose a highly rated seller or express shipping to avoid peak-season delays.",
            ),
            Self::new(
                "after-sales",
                0.15,
                "Confirm the return and warranty policy before buying and keep a record of all communication.",
            ),
            Self::new(
                "packaging",
                0.15,
                "Ask for reinforced packaging or inspect the parcel on delivery to avoid transit damage.",
            ),
            Self::new(
                "quality",
                0.20,
                "Inspect the item on arrival and test it thoroughly within the return window.",
            ),
            Self::new(
                "service",
                0.15,
                "Check how the seller handles complaints before committing to a purchase.",
            ),
        ]
    }
}

/// Settings for reputation scoring, pros/cons and advice.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReputationSettings {
    /// Maximum labels in each of the pros and cons lists.
    pub pros_cons_cap: usize,
    /// Minimum positive ratio for a cluster label to count as a pro.
    pub pro_ratio: f64,
    /// Minimum negative ratio for a cluster label to count as a con.
    pub con_ratio: f64,
    /// Advice rules, evaluated independently.
    pub advice: Vec<AdviceRule>,
}

impl Default for ReputationSettings {
    fn default() -> Self {
        Self {
            pros_cons_cap: 3,
            pro_ratio: 0.5,
            con_ratio: 0.3,
            advice: AdviceRule::builtin(),
        }
    }
}

/// Settings for the tokenizer lexicon.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconSettings {
    /// Word segmentation mode.
    pub segmentation: SegmentationMode,
    /// Whether to include the standard English stopword list.
    pub english_stopwords: bool,
    /// Additional stopwords.
    pub stopwords: Vec<String>,
    /// Additional synonyms: canonical topic token to its aliases.
    pub synonyms: BTreeMap<String, Vec<String>>,
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self {
            segmentation: SegmentationMode::Unicode,
            english_stopwords: true,
            stopwords: Vec::new(),
            synonyms: BTreeMap::new(),
        }
    }
}
