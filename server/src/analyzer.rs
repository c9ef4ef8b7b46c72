//! Client for the hosted text-analysis service.
//!
//! DESIGN
//! ======
//! Route handlers depend on the [`TextAnalyzer`] trait so tests can swap in
//! a mock; [`AnalysisClient`] is the reqwest-backed implementation. The API
//! key is attached here and never leaves the server.

use std::time::Duration;

use analysis::{API_KEY_HEADER, Analysis, AnalysisError, AnalyzeRequest, parse_analysis};
use async_trait::async_trait;

use crate::config::AnalysisConfig;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The reqwest client could not be built.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request did not complete (connect, timeout, body read).
    #[error("analysis request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("analysis response error: status {status}")]
    Response { status: u16, body: String },

    /// The service answered 2xx with a body that is not a valid analysis.
    #[error(transparent)]
    Parse(#[from] AnalysisError),
}

/// Scores free text per category.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Analysis, AnalyzeError>;
}

pub struct AnalysisClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl AnalysisClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalyzeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AnalyzeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url, api_key: config.api_key })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextAnalyzer for AnalysisClient {
    async fn analyze(&self, text: &str) -> Result<Analysis, AnalyzeError> {
        let body = AnalyzeRequest { text: text.to_owned() };
        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalyzeError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(AnalyzeError::Response { status: status.as_u16(), body: text });
        }
        Ok(parse_analysis(&text)?)
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
