//! Command implementations and dispatch.

pub mod analyze;
pub mod config;
pub mod init;
mod shared;
pub mod topics;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Analyze(cmd) => analyze::run(ctx, &cmd),
        Commands::Topics(cmd) => topics::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
