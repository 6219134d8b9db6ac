//! Health probe.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Liveness plus model reachability. Always 200; an unreachable model
/// backend shows up as `"model": false` and as 500s on /analyze.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let model = state.analyzer.health_check().await;
    Json(json!({ "status": "ok", "model": model }))
}
