//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! analyzer is optional: without an API key the server still renders pages
//! and `/api/analyze` answers 503.

use std::sync::Arc;

use crate::analyzer::TextAnalyzer;

#[derive(Clone, Default)]
pub struct AppState {
    pub analyzer: Option<Arc<dyn TextAnalyzer>>,
}

impl AppState {
    #[must_use]
    pub fn new(analyzer: Option<Arc<dyn TextAnalyzer>>) -> Self {
        Self { analyzer }
    }
}
