//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// Threshold separating positive/negative from neutral.
const CATEGORY_THRESHOLD: f64 = 0.3;

/// Coarse three-way bucket derived from the signed sentiment by fixed
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    /// Bucket a signed sentiment score. Boundary values (exactly ±0.3)
    /// are neutral.
    pub fn from_sentiment(sentiment: f64) -> Self {
        if sentiment > CATEGORY_THRESHOLD {
            Self::Positive
        } else if sentiment < -CATEGORY_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// A scored piece of news text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Signed sentiment in [-1, 1], rounded to 2 decimals.
    pub sentiment: f64,
    /// Heuristic urgency in [0, 10], rounded to 1 decimal.
    pub severity_score: f64,
    /// Three-way bucket derived from sentiment.
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exhaustive_and_exclusive() {
        assert_eq!(Category::from_sentiment(0.31), Category::Positive);
        assert_eq!(Category::from_sentiment(1.0), Category::Positive);
        assert_eq!(Category::from_sentiment(0.3), Category::Neutral);
        assert_eq!(Category::from_sentiment(0.0), Category::Neutral);
        assert_eq!(Category::from_sentiment(-0.3), Category::Neutral);
        assert_eq!(Category::from_sentiment(-0.31), Category::Negative);
        assert_eq!(Category::from_sentiment(-1.0), Category::Negative);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
