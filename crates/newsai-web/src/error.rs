//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsai_core::AnalysisError;
use serde_json::json;

/// Wrapper turning any analysis failure into a 500 with a
/// `{"detail": ...}` body.
///
/// Distinct failure modes (bad input, model unavailable, arithmetic
/// fault) are deliberately flattened into one generic response; callers
/// only contract on the `detail` field.
pub struct ApiError(pub AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "analysis request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}
