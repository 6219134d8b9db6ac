//! Sentiment classification contract.
//!
//! Sentiment inference is delegated to an external pretrained model. This
//! module defines the label/confidence pair such a model produces and the
//! trait any concrete backend (hosted or local) must implement, so backends
//! can be swapped without touching the scoring logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;

/// Polarity label produced by a classifier backend.
///
/// Serialized as `POSITIVE` / `NEGATIVE`, matching the wire format of
/// sentiment-analysis model servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// A classification: polarity label plus confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl Classification {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Signed sentiment in [-1, 1]: positive magnitude for a POSITIVE
    /// label, negative magnitude for a NEGATIVE one.
    pub fn signed_score(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.confidence,
            SentimentLabel::Negative => -self.confidence,
        }
    }
}

/// A sentiment model backend.
///
/// Text handed to `classify` is already truncated to the service's input
/// limit.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a piece of text into a polarity label and confidence.
    async fn classify(&self, text: &str) -> AnalysisResult<Classification>;

    /// Whether the backend is reachable and ready to serve.
    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_score_keeps_positive_magnitude() {
        let c = Classification::new(SentimentLabel::Positive, 0.95);
        assert_eq!(c.signed_score(), 0.95);
    }

    #[test]
    fn signed_score_negates_negative_magnitude() {
        let c = Classification::new(SentimentLabel::Negative, 0.9);
        assert_eq!(c.signed_score(), -0.9);
    }

    #[test]
    fn labels_serialize_uppercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");

        let label: SentimentLabel = serde_json::from_str("\"NEGATIVE\"").unwrap();
        assert_eq!(label, SentimentLabel::Negative);
    }
}
