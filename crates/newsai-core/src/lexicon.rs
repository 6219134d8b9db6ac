//! Severity keyword lexicon.
//!
//! The keyword lists are configuration data, not code: the defaults below
//! can be overridden from a TOML file and injected into the analyzer, so
//! they can be tuned and tested independently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisResult;

const HIGH_SEVERITY_WORDS: &[&str] =
    &["disaster", "emergency", "crisis", "death", "fatal", "war"];

const MEDIUM_SEVERITY_WORDS: &[&str] = &["problem", "issue", "concern", "risk", "warning"];

/// Severity score ceiling.
const MAX_SEVERITY: f64 = 10.0;

/// Base severity assigned to any text before keyword adjustments.
const BASE_SEVERITY: usize = 5;

/// Keyword lists driving the severity heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityLexicon {
    pub high_severity_words: Vec<String>,
    pub medium_severity_words: Vec<String>,
}

impl Default for SeverityLexicon {
    fn default() -> Self {
        Self {
            high_severity_words: HIGH_SEVERITY_WORDS.iter().map(|w| w.to_string()).collect(),
            medium_severity_words: MEDIUM_SEVERITY_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl SeverityLexicon {
    /// Load a lexicon override from a TOML file. Lists not present in the
    /// file keep their defaults.
    pub fn from_toml_file(path: &Path) -> AnalysisResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let lexicon = toml::from_str(&raw)?;
        Ok(lexicon)
    }

    /// Heuristic severity in [0, 10] for the given text.
    ///
    /// `min(5 + 2*high_count + medium_count, 10)`, then raised by
    /// `-2*sentiment` when the signed sentiment is negative, re-capped at
    /// 10. The score is capped above but intentionally has no floor.
    pub fn severity_score(&self, text: &str, sentiment: f64) -> f64 {
        let lower = text.to_lowercase();
        let high_count = count_hits(&lower, &self.high_severity_words);
        let medium_count = count_hits(&lower, &self.medium_severity_words);

        let mut score =
            ((BASE_SEVERITY + high_count * 2 + medium_count) as f64).min(MAX_SEVERITY);
        if sentiment < 0.0 {
            score = (score - sentiment * 2.0).min(MAX_SEVERITY);
        }
        score
    }
}

/// Sum of non-overlapping substring occurrences of each word in the text.
/// Raw substring matching: "warning" also matches inside "forewarning".
fn count_hits(text: &str, words: &[String]) -> usize {
    words
        .iter()
        .filter(|word| !word.is_empty())
        .map(|word| text.matches(word.as_str()).count())
        .sum()
}
