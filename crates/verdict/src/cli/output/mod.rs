//! Rendering and JSON serialization for CLI output.

mod style;

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
pub use style::{bad, dim, good, header, rule, subheader, warning};
use verdict_reputation::Tier;
use verdict_topics::{ClusterSet, TopicCluster};

/// Width of section separators.
pub const RULE_WIDTH: usize = 60;

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders a star rating as filled and empty stars.
pub fn star_bar(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Colors a tier label by how favourable it is.
pub fn tier_label(tier: Tier) -> String {
    match tier {
        Tier::StronglyRecommend | Tier::Recommend => good(tier.as_str()),
        Tier::Mixed => warning(tier.as_str()),
        Tier::Caution | Tier::NotRecommended => bad(tier.as_str()),
    }
}

/// Formats a cluster's net score, or a dash when unscored.
fn score_cell(cluster: &TopicCluster) -> String {
    cluster
        .score
        .map_or_else(|| "-".to_string(), |score| format!("{score:+}"))
}

/// Builds a table of clusters with their sentiment breakdown.
pub fn cluster_table(set: &ClusterSet) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Topic", "Reviews", "Pos", "Neg", "Neu", "Score"]);
    for cluster in set {
        table.add_row(vec![
            Cell::new(&cluster.label),
            Cell::new(cluster.size()),
            Cell::new(cluster.counts.positive),
            Cell::new(cluster.counts.negative),
            Cell::new(cluster.counts.neutral),
            Cell::new(score_cell(cluster)),
        ]);
    }
    table
}

/// Prints a titled cluster table, or a placeholder when there are no clusters.
pub fn print_clusters(title: &str, set: &ClusterSet) {
    println!(
        "{} {}",
        subheader(title),
        dim(&format!("({} strategy)", set.strategy))
    );
    if set.is_empty() {
        println!("  {}", dim("(none)"));
    } else {
        println!("{}", cluster_table(set));
    }
}

/// Prints each cluster followed by its quoted samples.
pub fn print_evidence(set: &ClusterSet) {
    println!(
        "{} {}",
        subheader("Topics with evidence"),
        dim(&format!("({} strategy)", set.strategy))
    );
    if set.is_empty() {
        println!("  {}", dim("(none)"));
        return;
    }
    for cluster in set {
        println!();
        println!(
            "{} {}",
            header(&cluster.label),
            dim(&format!(
                "{} reviews: {} positive, {} negative, {} neutral",
                cluster.size(),
                cluster.counts.positive,
                cluster.counts.negative,
                cluster.counts.neutral
            ))
        );
        for sample in &cluster.samples {
            println!("  \"{sample}\"");
        }
    }
}

/// Prints a labelled bullet list, or a placeholder when empty.
pub fn print_list(title: &str, items: &[String]) {
    println!("{}", subheader(title));
    if items.is_empty() {
        println!("  {}", dim("(none)"));
    }
    for item in items {
        println!("  - {item}");
    }
}

#[cfg(test)]
mod test {
    use verdict_topics::{SentimentCounts, StrategyKind};

    use super::*;

    fn cluster(label: &str, score: Option<i32>) -> TopicCluster {
        TopicCluster {
            label: label.to_string(),
            counts: SentimentCounts {
                positive: 2,
                negative: 1,
                neutral: 0,
            },
            score,
            samples: Vec::new(),
        }
    }

    #[test]
    fn star_bar_renders_five_slots() {
        assert_eq!(star_bar(3), "★★★☆☆");
        assert_eq!(star_bar(0), "☆☆☆☆☆");
        assert_eq!(star_bar(9), "★★★★★");
    }

    #[test]
    fn table_lists_every_cluster() {
        let set = ClusterSet {
            strategy: StrategyKind::Frequency,
            clusters: vec![cluster("price", Some(33)), cluster("box", None)],
        };
        let rendered = cluster_table(&set).to_string();
        assert!(rendered.contains("price"));
        assert!(rendered.contains("+33"));
        assert!(rendered.contains("box"));
        assert!(rendered.contains('-'));
    }
}
