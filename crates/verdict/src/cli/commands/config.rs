//! Implementation of `verdict config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::warning};

/// Shows effective configuration settings, then any validation warnings on stderr.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    match config.to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: failed to render configuration: {e}");
            return ExitCode::FAILURE;
        }
    }
    for w in config.validate() {
        eprintln!("{} {w}", warning("warning:"));
    }
    ExitCode::SUCCESS
}
