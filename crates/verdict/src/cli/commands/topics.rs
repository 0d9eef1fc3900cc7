//! Implementation of `verdict topics`.

use std::process::ExitCode;

use verdict_topics::ClusterParams;

use super::shared::load_reviews;
use crate::cli::{
    args::TopicsCommand,
    context::CommandContext,
    output::{print_clusters, print_evidence, print_json},
};

/// Lists review topics, ranked by net sentiment or with evidence quotes.
pub fn run(ctx: &CommandContext, cmd: &TopicsCommand) -> ExitCode {
    let reviews = match load_reviews(&cmd.input) {
        Ok(reviews) => reviews,
        Err(code) => return code,
    };

    let clustering = cmd.cluster.apply(&ctx.config.clustering);
    let engine = ctx.engine(&clustering);

    let set = if cmd.evidence {
        engine.build_clusters(&reviews, &ClusterParams::global(&clustering))
    } else {
        engine.extract_clusters(&reviews, clustering.max_clusters, clustering.top_terms)
    };

    if cmd.json {
        return print_json(&set);
    }
    if cmd.evidence {
        print_evidence(&set);
    } else {
        print_clusters("Topics", &set);
    }
    ExitCode::SUCCESS
}
