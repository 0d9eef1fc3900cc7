//! Clap argument definitions for the `verdict` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};
use verdict_config::{ClusterSettings, StrategyChoice};

/// Parse a clustering strategy from a string.
fn parse_strategy(s: &str) -> Result<StrategyChoice, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Cluster product reviews into topics and score reputation")]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace); VERDICT_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parses process arguments, exiting with usage on error.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Shared flags that override clustering settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ClusterArgs {
    /// Maximum topic clusters [default: 5]
    #[arg(short = 'k', long)]
    pub clusters: Option<usize>,

    /// Maximum terms per topic label [default: 3]
    #[arg(short = 'm', long)]
    pub top_terms: Option<usize>,

    /// Clustering strategy: auto (k-means with fallback) or frequency [default: auto]
    #[arg(short = 's', long, value_parser = parse_strategy)]
    pub strategy: Option<StrategyChoice>,

    /// Fixed k-means seed for reproducible topics
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ClusterArgs {
    /// Applies the overrides to configured settings.
    ///
    /// `--clusters` sets both the ranked and the evidence cluster limits.
    pub fn apply(&self, settings: &ClusterSettings) -> ClusterSettings {
        let mut settings = settings.clone();
        if let Some(clusters) = self.clusters {
            settings.max_clusters = clusters;
            settings.global_clusters = clusters;
        }
        if let Some(top_terms) = self.top_terms {
            settings.top_terms = top_terms;
        }
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

/// Arguments for `verdict analyze`.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeCommand {
    /// JSON file of reviews, or - for stdin
    pub input: String,

    /// Clustering overrides.
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `verdict topics`.
#[derive(Args, Debug, Clone)]
pub struct TopicsCommand {
    /// JSON file of reviews, or - for stdin
    pub input: String,

    /// Clustering overrides.
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Show sample quotes per topic (uses the global cluster limit [default: 8])
    #[arg(long)]
    pub evidence: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `verdict init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.verdict.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `verdict` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score a product's reputation from its reviews
    #[command(after_help = "\
INPUT FORMAT:
  A JSON array of review objects:

  [
    {\"content\": \"fast shipping, great value\", \"sentiment\": \"positive\", \"rating\": 5},
    {\"content\": \"box arrived crushed\", \"sentiment\": \"negative\", \"rating\": 2}
  ]

  sentiment is one of positive, negative, neutral. Ratings outside 1-5 are
  clamped.

EXAMPLES:
  verdict analyze reviews.json
  verdict analyze reviews.json --clusters 3 --seed 7
  cat reviews.json | verdict analyze - --json")]
    Analyze(AnalyzeCommand),

    /// List the topics discussed in reviews
    Topics(TopicsCommand),

    /// Initialize verdict configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings and warnings
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    /// Catches drift between the configured defaults and the help text.
    #[test]
    fn cli_help_defaults_match_settings() {
        let cmd = Cli::command();
        let defaults = ClusterSettings::default();

        let clusters_help = get_arg_help(&cmd, "analyze", "clusters");
        assert!(
            clusters_help.contains(&format!("[default: {}]", defaults.max_clusters)),
            "analyze --clusters help should contain default {}: {clusters_help}",
            defaults.max_clusters
        );

        let top_terms_help = get_arg_help(&cmd, "analyze", "top_terms");
        assert!(top_terms_help.contains(&format!("[default: {}]", defaults.top_terms)));

        let evidence_help = get_arg_help(&cmd, "topics", "evidence");
        assert!(evidence_help.contains(&format!("[default: {}]", defaults.global_clusters)));
    }

    #[test]
    fn overrides_apply_to_settings() {
        let cli = Cli::try_parse_from([
            "verdict", "analyze", "r.json", "-k", "4", "--strategy", "frequency", "--seed", "9",
        ])
        .unwrap();
        let Commands::Analyze(cmd) = cli.command else {
            panic!("expected analyze");
        };
        let settings = cmd.cluster.apply(&ClusterSettings::default());
        assert_eq!(settings.max_clusters, 4);
        assert_eq!(settings.global_clusters, 4);
        assert_eq!(settings.top_terms, 3);
        assert_eq!(settings.strategy, StrategyChoice::Frequency);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["verdict", "topics", "r.json", "--strategy", "lda"]).is_err());
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["verdict", "config", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
