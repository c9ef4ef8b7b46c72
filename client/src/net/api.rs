//! HTTP and collaborator helpers for the browser.
//!
//! Client-side (hydrate): real calls via `gloo-net` and `gloo-timers`.
//! Server-side (SSR): stubs returning errors since these actions are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed request
//! degrades the page instead of breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use analysis::AnalysisReport;
use registration::{Registrar, Registration, SubmissionError};

/// Same-origin proxy in front of the analysis service.
pub const ANALYZE_ENDPOINT: &str = "/api/analyze";

#[cfg(any(test, feature = "hydrate"))]
fn analyze_failed_message(status: u16) -> String {
    format!("analyze failed: {status}")
}

/// Score `text` via `POST /api/analyze`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not an analysis report.
pub async fn analyze_text(text: &str) -> Result<AnalysisReport, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = analysis::AnalyzeRequest { text: text.to_owned() };
        let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(analyze_failed_message(resp.status()));
        }
        resp.json::<AnalysisReport>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}

/// Registration collaborator used by the register page. There is no
/// registration backend yet, so the browser runs the simulated one on its
/// own timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiRegistrar;

#[async_trait::async_trait(?Send)]
impl Registrar for ApiRegistrar {
    async fn register(&self, account: &Registration) -> Result<(), SubmissionError> {
        #[cfg(feature = "hydrate")]
        {
            use registration::timing::SIMULATED_REGISTRATION_DELAY;

            let registrar =
                registration::SimulatedRegistrar::new(SIMULATED_REGISTRATION_DELAY, gloo_timers::future::sleep);
            registrar.register(account).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = account;
            Err(SubmissionError::Unavailable)
        }
    }
}
