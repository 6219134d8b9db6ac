//! HTTP client for a hosted text-classification model.
//!
//! Speaks the /predict API of text-classification inference servers:
//! POST `{"inputs": text}` returns a confidence-ranked list of
//! `{label, score}` pairs.

use async_trait::async_trait;
use newsai_core::{
    AnalysisError, AnalysisResult, Classification, SentimentClassifier, SentimentLabel,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default inference server URL.
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:8080";

/// HTTP sentiment inference client.
#[derive(Clone)]
pub struct InferenceClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    label: SentimentLabel,
    score: f64,
}

impl InferenceClient {
    /// Create a new client for the given inference server URL.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client with the default URL (localhost:8080).
    pub fn default_client() -> Self {
        Self::new(DEFAULT_INFERENCE_URL)
    }

    async fn predict(&self, text: &str) -> AnalysisResult<Classification> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { inputs: text })
            .send()
            .await
            .map_err(|e| {
                AnalysisError::inference(format!("failed to reach inference server: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::inference(format!(
                "inference server error ({status}): {body}"
            )));
        }

        let predictions: Vec<Prediction> = response
            .json()
            .await
            .map_err(|e| AnalysisError::ModelResponse(e.to_string()))?;

        // Predictions arrive ranked by confidence; the top entry wins.
        let top = predictions
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::ModelResponse("empty prediction list".into()))?;

        debug!(label = ?top.label, score = top.score, "model prediction");

        Ok(Classification::new(top.label, top.score))
    }
}

#[async_trait]
impl SentimentClassifier for InferenceClient {
    async fn classify(&self, text: &str) -> AnalysisResult<Classification> {
        self.predict(text).await
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
