//! Helpers shared by the review-processing commands.

use std::process::ExitCode;

use verdict_topics::ReviewRecord;

use crate::cli::input::read_reviews;

/// Reads reviews, reporting failures with a consistent error.
pub fn load_reviews(path: &str) -> Result<Vec<ReviewRecord>, ExitCode> {
    read_reviews(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}
