//! verdict: review topic clustering and reputation scoring.
//!
//! verdict reads a product's reviews, groups them into discussed topics, and
//! condenses them into a reputation report: a 0-100 score with a
//! recommendation tier, sentiment percentages, pros and cons, buyer advice,
//! and representative quotes per topic.

#![warn(missing_docs)]

pub mod cli;
