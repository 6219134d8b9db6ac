//! Application state.

use std::sync::Arc;

use newsai_core::Analyzer;

/// Application state shared across handlers. The analyzer is immutable;
/// requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self { analyzer }
    }
}
