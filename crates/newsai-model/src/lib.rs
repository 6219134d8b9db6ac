//! # NewsAI Model
//!
//! Sentiment classifier backends for the analysis service.
//!
//! Provides an HTTP client for a hosted classification model plus a
//! deterministic keyword-lexicon fallback for offline use and tests.

pub mod http;
pub mod lexicon;

pub use http::{InferenceClient, DEFAULT_INFERENCE_URL};
pub use lexicon::LexiconClassifier;
