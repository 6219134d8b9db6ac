//! Analysis route handler.

use axum::{extract::State, Json};
use newsai_core::Analysis;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    pub title: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis = state
        .analyzer
        .analyze(&req.content, req.title.as_deref())
        .await?;

    Ok(Json(analysis))
}
