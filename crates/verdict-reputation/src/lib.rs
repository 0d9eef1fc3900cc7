//! Reputation scoring for reviewed products.
//!
//! Combines review ratings, sentiment and topic clusters into a
//! [`ReputationReport`]: a 0-100 composite score with a recommendation
//! [`Tier`], sentiment percentages, pros and cons, and advice sentences from
//! per-topic negative ratios. [`assess`] runs the whole pipeline from raw
//! reviews.
//!
//! Nothing here can fail. Every ratio guards its denominator and an empty
//! review set scores 0.

#![warn(missing_docs)]

mod advice;
mod distribution;
mod report;
mod score;

pub use advice::{advise, topic_negative_ratio};
pub use distribution::{SentimentPercentages, average_rating};
pub use report::{Insight, ReputationReport, assess};
pub use score::{Tier, composite_score};
