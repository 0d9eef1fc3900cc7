//! Implementation of `verdict analyze`.

use std::process::ExitCode;

use verdict_reputation::{Insight, assess};

use super::shared::load_reviews;
use crate::cli::{
    args::AnalyzeCommand,
    context::CommandContext,
    output::{
        RULE_WIDTH, dim, header, print_clusters, print_json, print_list, rule, star_bar,
        subheader, tier_label, warning,
    },
};

/// Scores a product's reputation from a review file.
pub fn run(ctx: &CommandContext, cmd: &AnalyzeCommand) -> ExitCode {
    let reviews = match load_reviews(&cmd.input) {
        Ok(reviews) => reviews,
        Err(code) => return code,
    };

    let clustering = cmd.cluster.apply(&ctx.config.clustering);
    let engine = ctx.engine(&clustering);
    let insight = assess(&engine, &reviews, &ctx.config.reputation, &clustering);

    if cmd.json {
        return print_json(&insight);
    }
    print_insight(&insight);
    ExitCode::SUCCESS
}

/// Prints the human-readable report.
fn print_insight(insight: &Insight) {
    let report = &insight.report;

    println!("{}", header("Reputation"));
    println!("{}", rule(RULE_WIDTH));
    println!(
        "Score:    {}/100 {} ({:.1}/10)",
        report.score,
        star_bar(report.stars()),
        report.score_out_of_ten()
    );
    println!("Verdict:  {}", tier_label(report.tier));
    println!(
        "Rating:   {:.2} average over {} reviews",
        report.average_rating, report.total
    );
    println!(
        "Mood:     {}% positive, {}% negative, {}% neutral",
        report.percentages.positive, report.percentages.negative, report.percentages.neutral
    );
    println!();

    print_list("Pros", &report.pros);
    print_list("Cons", &report.cons);
    println!();

    if !report.advice.is_empty() {
        println!("{}", subheader("Advice"));
        for line in &report.advice {
            println!("  {} {line}", warning("!"));
        }
        println!();
    }

    print_clusters("Topics", &insight.clusters);

    if !report.keywords.is_empty() {
        let cloud: Vec<String> = report
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.text, k.weight))
            .collect();
        println!("{} {}", subheader("Keywords:"), dim(&cloud.join(", ")));
    }
}
