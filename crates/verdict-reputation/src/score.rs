//! Composite reputation score and recommendation tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight of the average rating in the composite score.
const RATING_WEIGHT: f64 = 60.0;

/// Weight of the positive ratio in the composite score.
const POSITIVE_WEIGHT: f64 = 40.0;

/// Highest possible star rating.
const MAX_RATING: f64 = 5.0;

/// Blends the average rating and the positive ratio into a 0-100 score.
///
/// `round((avg_rating / 5) * 60 + positive_ratio * 40)`, halves rounding to
/// even, clamped to `0..=100`.
pub fn composite_score(avg_rating: f64, positive_ratio: f64) -> u8 {
    let raw = (avg_rating / MAX_RATING) * RATING_WEIGHT + positive_ratio * POSITIVE_WEIGHT;
    if raw.is_nan() {
        return 0;
    }
    raw.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Recommendation tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Below 40.
    NotRecommended,
    /// 40 to 54.
    Caution,
    /// 55 to 69.
    Mixed,
    /// 70 to 84.
    Recommend,
    /// 85 and above.
    StronglyRecommend,
}

impl Tier {
    /// Maps a score to its tier. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::StronglyRecommend,
            70..=84 => Self::Recommend,
            55..=69 => Self::Mixed,
            40..=54 => Self::Caution,
            _ => Self::NotRecommended,
        }
    }

    /// The kebab-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StronglyRecommend => "strongly-recommend",
            Self::Recommend => "recommend",
            Self::Mixed => "mixed",
            Self::Caution => "caution",
            Self::NotRecommended => "not-recommended",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn perfect_reviews_score_100() {
        assert_eq!(composite_score(5.0, 1.0), 100);
    }

    #[test]
    fn no_reviews_score_0() {
        assert_eq!(composite_score(0.0, 0.0), 0);
    }

    #[test]
    fn mixed_reviews() {
        // 4.0/5*60 = 48, 0.5*40 = 20
        assert_eq!(composite_score(4.0, 0.5), 68);
        // 2.5/5*60 = 30, 0.25*40 = 10
        assert_eq!(composite_score(2.5, 0.25), 40);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(composite_score(9.0, 1.0), 100);
        assert_eq!(composite_score(-3.0, 0.0), 0);
        assert_eq!(composite_score(f64::NAN, 0.5), 0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::from_score(100), Tier::StronglyRecommend);
        assert_eq!(Tier::from_score(85), Tier::StronglyRecommend);
        assert_eq!(Tier::from_score(84), Tier::Recommend);
        assert_eq!(Tier::from_score(70), Tier::Recommend);
        assert_eq!(Tier::from_score(69), Tier::Mixed);
        assert_eq!(Tier::from_score(55), Tier::Mixed);
        assert_eq!(Tier::from_score(54), Tier::Caution);
        assert_eq!(Tier::from_score(40), Tier::Caution);
        assert_eq!(Tier::from_score(39), Tier::NotRecommended);
        assert_eq!(Tier::from_score(0), Tier::NotRecommended);
    }

    #[test]
    fn tier_labels() {
        assert_eq!(Tier::StronglyRecommend.to_string(), "strongly-recommend");
        assert_eq!(Tier::NotRecommended.to_string(), "not-recommended");
        assert_eq!(serde_json::to_string(&Tier::Mixed).unwrap(), "\"mixed\"");
    }
}
