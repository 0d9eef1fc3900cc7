//! Rating and sentiment distributions over a review set.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use verdict_topics::{ReviewRecord, SentimentCounts};

/// Mean rating, or 0 for an empty review set.
pub fn average_rating(reviews: &[ReviewRecord]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u64 = reviews.iter().map(|review| u64::from(review.rating)).sum();
    sum as f64 / reviews.len() as f64
}

/// Whole-number sentiment percentages.
///
/// Percentages are apportioned by the largest-remainder method, so they sum
/// to exactly 100 whenever at least one review was counted, and are all 0
/// otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentPercentages {
    /// Positive share.
    pub positive: u8,
    /// Negative share.
    pub negative: u8,
    /// Neutral share.
    pub neutral: u8,
}

impl SentimentPercentages {
    /// Apportions 100 percentage points among the three counts.
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        let raw = [counts.positive, counts.negative, counts.neutral];
        let mut shares = raw.map(|count| count * 100 / total);
        let assigned: usize = shares.iter().sum();

        // Hand out the remaining points by largest remainder, earlier labels
        // first on ties.
        let mut order = [0usize, 1, 2];
        order.sort_by_key(|&i| Reverse(raw[i] * 100 % total));
        for &i in order.iter().take(100 - assigned) {
            shares[i] += 1;
        }

        let [positive, negative, neutral] = shares.map(|share| share as u8);
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Sum of the three shares.
    pub fn sum(&self) -> u16 {
        u16::from(self.positive) + u16::from(self.negative) + u16::from(self.neutral)
    }
}
