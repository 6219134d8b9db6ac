//! NewsAI Core Library
//!
//! Domain models and scoring logic for the news analysis service.

pub mod analysis;
pub mod error;
pub mod lexicon;
pub mod sentiment;

pub use analysis::{Analysis, Analyzer, Category, MAX_INPUT_CHARS};
pub use error::{AnalysisError, AnalysisResult};
pub use lexicon::SeverityLexicon;
pub use sentiment::{Classification, SentimentClassifier, SentimentLabel};
