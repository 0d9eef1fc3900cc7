//! Review records as supplied by the review store.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Sentiment label attached to a review upstream of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favourable review.
    Positive,
    /// Unfavourable review.
    Negative,
    /// Neither.
    Neutral,
}

impl Sentiment {
    /// All labels, in reporting order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// The lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sentiment label '{s}'"))
    }
}

/// One review.
///
/// The engine only reads records. Callers guarantee that `rating` lies in
/// `1..=5`; it is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Free-text review body.
    pub content: String,
    /// Upstream sentiment label.
    pub sentiment: Sentiment,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl ReviewRecord {
    /// Creates a review record.
    pub fn new(content: impl Into<String>, sentiment: Sentiment, rating: u8) -> Self {
        Self {
            content: content.into(),
            sentiment,
            rating,
        }
    }
}
