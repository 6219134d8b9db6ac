//! Centralized error types for the analysis service.

use thiserror::Error;

/// Main error type for analysis operations.
///
/// All variants collapse into a single generic server error at the HTTP
/// boundary; the taxonomy exists for logs and tests.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Malformed model response: {0}")]
    ModelResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
