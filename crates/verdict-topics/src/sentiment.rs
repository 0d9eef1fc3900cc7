//! Per-cluster sentiment aggregation.

use serde::{Deserialize, Serialize};

use crate::{ReviewRecord, Sentiment};

/// Review counts by sentiment label.
///
/// These three counts are a cluster's only sentiment representation. Ratings
/// play no part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    /// Positive reviews.
    pub positive: usize,
    /// Negative reviews.
    pub negative: usize,
    /// Neutral reviews.
    pub neutral: usize,
}

impl SentimentCounts {
    /// Counts the sentiment of every review.
    pub fn of<'a>(reviews: impl IntoIterator<Item = &'a ReviewRecord>) -> Self {
        let mut counts = Self::default();
        for review in reviews {
            counts.record(review.sentiment);
        }
        counts
    }

    /// Counts the reviews at `members` (indices into `reviews`).
    ///
    /// Indices past the end of `reviews` are ignored.
    pub fn tally(reviews: &[ReviewRecord], members: &[usize]) -> Self {
        Self::of(members.iter().filter_map(|&index| reviews.get(index)))
    }

    /// Adds one review with the given sentiment.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Total number of reviews counted.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Positive share, with the total guarded to at least 1.
    pub fn positive_ratio(&self) -> f64 {
        self.positive as f64 / self.guarded_total()
    }

    /// Negative share, with the total guarded to at least 1.
    pub fn negative_ratio(&self) -> f64 {
        self.negative as f64 / self.guarded_total()
    }

    /// Net score: `round(positive% - negative% / 2)`.
    ///
    /// Ranges from -50 (all negative) to 100 (all positive). Halves round to
    /// even.
    pub fn net_score(&self) -> i32 {
        let raw = self.positive_ratio() * 100.0 - self.negative_ratio() * 100.0 * 0.5;
        raw.round_ties_even() as i32
    }

    /// Total as a float, never below 1.
    fn guarded_total(&self) -> f64 {
        self.total().max(1) as f64
    }
}
