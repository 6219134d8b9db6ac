//! Deterministic keyword-lexicon classifier.
//!
//! Offline fallback backend: counts positive and negative lexicon words
//! present in the text and reports the dominant polarity. Used when no
//! inference server is available, and in tests where determinism matters.

use std::collections::HashSet;

use async_trait::async_trait;
use newsai_core::{AnalysisResult, Classification, SentimentClassifier, SentimentLabel};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "win", "success", "successful", "growth", "improve",
    "improved", "hope", "celebrate", "breakthrough", "record", "strong", "positive",
    "peace", "recovery", "joy", "happy", "progress",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "loss", "fail", "failure", "crisis", "disaster", "death",
    "fear", "decline", "weak", "negative", "war", "attack", "threat", "crash", "collapse",
    "emergency", "fatal",
];

/// Keyword-based sentiment classifier.
pub struct LexiconClassifier {
    positive_words: HashSet<&'static str>,
    negative_words: HashSet<&'static str>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().copied().collect(),
            negative_words: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    fn score(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();
        let positive = count_present(&lower, &self.positive_words);
        let negative = count_present(&lower, &self.negative_words);
        let total = positive + negative;

        if total == 0 {
            // No signal: a zero-confidence POSITIVE signs to 0.0 and lands
            // in the neutral category downstream.
            return Classification::new(SentimentLabel::Positive, 0.0);
        }

        let (label, dominant) = if negative > positive {
            (SentimentLabel::Negative, negative)
        } else {
            (SentimentLabel::Positive, positive)
        };

        // Margin of the dominant side over the other, in [0, 1].
        let confidence = (2 * dominant - total) as f64 / total as f64;
        Classification::new(label, confidence)
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> AnalysisResult<Classification> {
        Ok(self.score(text))
    }
}

/// Number of distinct lexicon words present in the text.
fn count_present(text: &str, words: &HashSet<&'static str>) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}
