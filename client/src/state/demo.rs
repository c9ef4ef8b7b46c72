//! Render state of the landing-page analysis demo.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use analysis::{AnalysisReport, CategoryScore};

const BADGE: &str = "px-3 py-1 rounded-full text-sm font-medium";

/// Lifecycle of one analysis request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DemoStatus {
    /// Nothing analyzed yet; the result panel is hidden.
    #[default]
    Idle,
    Analyzing,
    Done(AnalysisReport),
    /// Transport or response failure.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemoState {
    pub status: DemoStatus,
    pub elapsed_ms: Option<f64>,
}

impl DemoState {
    /// Start an analysis of `input`.
    ///
    /// Returns the trimmed text to send, or `None` when it is blank or a
    /// request is already running.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.status == DemoStatus::Analyzing {
            return None;
        }
        self.status = DemoStatus::Analyzing;
        self.elapsed_ms = None;
        Some(text.to_owned())
    }

    /// Record the outcome. The timer is only shown for answered requests.
    pub fn finish(&mut self, result: Result<AnalysisReport, String>, elapsed_ms: f64) {
        match result {
            Ok(report) => {
                self.status = DemoStatus::Done(report);
                self.elapsed_ms = Some(elapsed_ms);
            }
            Err(_) => self.status = DemoStatus::Failed,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status != DemoStatus::Idle
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match &self.status {
            DemoStatus::Idle => "",
            DemoStatus::Analyzing => "Analyzing...",
            DemoStatus::Done(report) if report.success => "Success",
            DemoStatus::Done(_) => "Failed",
            DemoStatus::Failed => "Error",
        }
    }

    #[must_use]
    pub fn status_class(&self) -> String {
        let color = match &self.status {
            DemoStatus::Done(report) if report.success => "bg-green-500",
            DemoStatus::Done(_) | DemoStatus::Failed => "bg-red-500",
            DemoStatus::Idle | DemoStatus::Analyzing => "bg-slate-500",
        };
        format!("{color} {BADGE}")
    }

    #[must_use]
    pub fn processing_text(&self) -> String {
        format_seconds(self.elapsed_ms.unwrap_or(0.0))
    }

    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.status {
            DemoStatus::Done(report) => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub fn categories(&self) -> Vec<CategoryScore> {
        self.report().map(|r| r.categories.clone()).unwrap_or_default()
    }
}

/// Milliseconds as seconds with two decimals, e.g. `"1.25s"`.
#[must_use]
pub fn format_seconds(ms: f64) -> String {
    format!("{:.2}s", ms / 1000.0)
}
