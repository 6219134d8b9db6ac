//! News text scoring.
//!
//! Pipeline:
//! 1. Compose title and content into one text
//! 2. Truncate to the model input limit
//! 3. Classify via the configured backend (signed sentiment)
//! 4. Apply the keyword severity heuristic
//! 5. Bucket the sentiment into a category

pub mod model;

use std::sync::Arc;

use tracing::debug;

use crate::error::AnalysisResult;
use crate::lexicon::SeverityLexicon;
use crate::sentiment::SentimentClassifier;

pub use model::{Analysis, Category};

/// Maximum number of characters fed to the classifier.
pub const MAX_INPUT_CHARS: usize = 512;

/// Scores news text using a classifier backend and a severity lexicon.
///
/// Stateless between calls: identical input with a deterministic
/// classifier always yields identical output.
pub struct Analyzer {
    classifier: Arc<dyn SentimentClassifier>,
    lexicon: SeverityLexicon,
}

impl Analyzer {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, lexicon: SeverityLexicon) -> Self {
        Self { classifier, lexicon }
    }

    /// Score a piece of news text.
    pub async fn analyze(&self, content: &str, title: Option<&str>) -> AnalysisResult<Analysis> {
        let composed = compose(content, title);
        let text = truncate(&composed, MAX_INPUT_CHARS);

        let classification = self.classifier.classify(text).await?;
        let sentiment = classification.signed_score();

        // The heuristic runs on the truncated text, same as the classifier.
        let severity = self.lexicon.severity_score(text, sentiment);
        let category = Category::from_sentiment(sentiment);

        debug!(sentiment, severity, category = category.as_str(), "scored text");

        Ok(Analysis {
            sentiment: round_to(sentiment, 2),
            severity_score: round_to(severity, 1),
            category,
        })
    }

    /// Whether the classifier backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.classifier.health_check().await
    }
}

/// Prefix the content with the title when one is present.
fn compose(content: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{title}. {content}"),
        None => content.to_string(),
    }
}

/// Keep at most the first `limit` characters. Codepoint truncation: may
/// cut mid-word.
fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{Classification, SentimentLabel};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedClassifier(Classification);

    #[async_trait]
    impl SentimentClassifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> AnalysisResult<Classification> {
            Ok(self.0)
        }
    }

    /// Records the text it was handed, for asserting on the model input.
    struct CapturingClassifier {
        seen: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SentimentClassifier for CapturingClassifier {
        async fn classify(&self, text: &str) -> AnalysisResult<Classification> {
            *self.seen.lock().unwrap() = Some(text.to_string());
            Ok(Classification::new(SentimentLabel::Positive, 0.5))
        }
    }

    fn analyzer_with(label: SentimentLabel, confidence: f64) -> Analyzer {
        Analyzer::new(
            Arc::new(FixedClassifier(Classification::new(label, confidence))),
            SeverityLexicon::default(),
        )
    }

    #[test]
    fn compose_without_title_is_content() {
        assert_eq!(compose("body text", None), "body text");
    }

    #[test]
    fn compose_with_title_prefixes_it() {
        assert_eq!(compose("body text", Some("Headline")), "Headline. body text");
    }

    #[test]
    fn truncate_keeps_at_most_512_codepoints() {
        let long = "é".repeat(600);
        let cut = truncate(&long, MAX_INPUT_CHARS);
        assert_eq!(cut.chars().count(), 512);

        let short = "short";
        assert_eq!(truncate(short, MAX_INPUT_CHARS), "short");
    }

    #[tokio::test]
    async fn classifier_sees_truncated_text() {
        let classifier = Arc::new(CapturingClassifier {
            seen: Mutex::new(None),
        });
        let analyzer = Analyzer::new(classifier.clone(), SeverityLexicon::default());

        let content = "x".repeat(600);
        analyzer.analyze(&content, Some("title")).await.unwrap();

        let seen = classifier.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.chars().count(), 512);
        assert!(seen.starts_with("title. "));
    }

    #[tokio::test]
    async fn negative_disaster_report_maxes_severity() {
        let analyzer = analyzer_with(SentimentLabel::Negative, 0.9);
        let analysis = analyzer
            .analyze("There was a disaster and crisis today", None)
            .await
            .unwrap();

        assert_eq!(analysis.sentiment, -0.9);
        assert_eq!(analysis.severity_score, 10.0);
        assert_eq!(analysis.category, Category::Negative);
    }

    #[tokio::test]
    async fn positive_news_keeps_base_severity() {
        let analyzer = analyzer_with(SentimentLabel::Positive, 0.95);
        let analysis = analyzer.analyze("Great news today", None).await.unwrap();

        assert_eq!(analysis.sentiment, 0.95);
        assert_eq!(analysis.severity_score, 5.0);
        assert_eq!(analysis.category, Category::Positive);
    }

    #[tokio::test]
    async fn empty_content_yields_well_formed_response() {
        let analyzer = analyzer_with(SentimentLabel::Positive, 0.0);
        let analysis = analyzer.analyze("", None).await.unwrap();

        assert_eq!(analysis.sentiment, 0.0);
        assert_eq!(analysis.severity_score, 5.0);
        assert_eq!(analysis.category, Category::Neutral);
    }

    #[tokio::test]
    async fn low_confidence_lands_in_neutral() {
        let analyzer = analyzer_with(SentimentLabel::Negative, 0.2);
        let analysis = analyzer.analyze("mixed reports", None).await.unwrap();

        assert_eq!(analysis.category, Category::Neutral);
        // 5 - (-0.2 * 2) = 5.4
        assert_eq!(analysis.severity_score, 5.4);
    }

    #[tokio::test]
    async fn results_are_rounded() {
        let analyzer = analyzer_with(SentimentLabel::Negative, 0.333);
        let analysis = analyzer.analyze("calm afternoon", None).await.unwrap();

        // raw sentiment -0.333, raw severity 5.666
        assert_eq!(analysis.sentiment, -0.33);
        assert_eq!(analysis.severity_score, 5.7);
    }

    #[tokio::test]
    async fn identical_input_yields_identical_output() {
        let analyzer = analyzer_with(SentimentLabel::Negative, 0.7);
        let a = analyzer.analyze("a warning issued", Some("Alert")).await.unwrap();
        let b = analyzer.analyze("a warning issued", Some("Alert")).await.unwrap();
        assert_eq!(a, b);
    }
}
