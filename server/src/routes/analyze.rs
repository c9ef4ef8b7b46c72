//! `POST /api/analyze`: proxy to the text-analysis service.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use analysis::{AnalysisReport, AnalyzeRequest};

use crate::state::AppState;

/// Score the request text and return the flattened report.
///
/// Blank text is 400, a missing analyzer 503, and any analyzer failure 502.
/// Upstream error details are logged, not returned.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, String)> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "text must not be empty".to_owned()));
    }
    let Some(analyzer) = state.analyzer.as_ref() else {
        return Err((StatusCode::SERVICE_UNAVAILABLE, "text analysis is not configured".to_owned()));
    };

    match analyzer.analyze(text).await {
        Ok(analysis) => {
            let report = analysis.report();
            tracing::info!(
                chars = text.chars().count(),
                toxicity = report.toxicity,
                band = report.band.label(),
                categories = report.categories.len(),
                "text analyzed"
            );
            Ok(Json(report))
        }
        Err(e) => {
            tracing::warn!(error = %e, "text analysis failed");
            Err((StatusCode::BAD_GATEWAY, "text analysis failed".to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
