//! Loading review records from JSON.

use std::{
    fs,
    io::{self, Read},
};

use serde::Deserialize;
use thiserror::Error;
use verdict_topics::{ReviewRecord, Sentiment};

/// Lowest and highest accepted star ratings.
const RATING_RANGE: (i64, i64) = (1, 5);

/// Errors raised while reading review input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input could not be read.
    #[error("failed to read {source_name}: {source}")]
    Read {
        /// Path or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input was not a JSON array of reviews.
    #[error("invalid review data in {source_name}: {source}")]
    Parse {
        /// Path or `stdin`.
        source_name: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A review as it appears on the wire; missing content counts as empty.
#[derive(Deserialize)]
struct RawReview {
    /// Review text.
    #[serde(default)]
    content: Option<String>,
    /// Sentiment label.
    sentiment: Sentiment,
    /// Star rating, clamped on load.
    rating: i64,
}

impl RawReview {
    /// Converts into a record, clamping out-of-range ratings.
    fn into_record(self, index: usize) -> ReviewRecord {
        let (low, high) = RATING_RANGE;
        let clamped = self.rating.clamp(low, high);
        if clamped != self.rating {
            tracing::warn!(
                review = index,
                rating = self.rating,
                clamped,
                "rating out of range"
            );
        }
        let rating = u8::try_from(clamped).unwrap_or(1);
        ReviewRecord::new(self.content.unwrap_or_default(), self.sentiment, rating)
    }
}

/// Reads reviews from a file path, or stdin when `path` is `-`.
pub fn read_reviews(path: &str) -> Result<Vec<ReviewRecord>, InputError> {
    let source_name = if path == "-" { "stdin" } else { path };
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map(|_| buf)
            .map_err(|source| InputError::Read {
                source_name: source_name.to_string(),
                source,
            })?
    } else {
        fs::read_to_string(path).map_err(|source| InputError::Read {
            source_name: source_name.to_string(),
            source,
        })?
    };
    parse_reviews(&text, source_name)
}

/// Parses a JSON array of reviews.
pub fn parse_reviews(text: &str, source_name: &str) -> Result<Vec<ReviewRecord>, InputError> {
    let raw: Vec<RawReview> = serde_json::from_str(text).map_err(|source| InputError::Parse {
        source_name: source_name.to_string(),
        source,
    })?;
    let reviews: Vec<ReviewRecord> = raw
        .into_iter()
        .enumerate()
        .map(|(index, review)| review.into_record(index))
        .collect();
    tracing::info!(count = reviews.len(), source = source_name, "loaded reviews");
    Ok(reviews)
}
