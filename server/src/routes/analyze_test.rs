use std::sync::{Arc, Mutex};

use analysis::{Analysis, AnalysisError, Band, CategoryScore};
use async_trait::async_trait;

use super::*;
use crate::analyzer::{AnalyzeError, TextAnalyzer};

struct MockAnalyzer {
    reply: Mutex<Option<Result<Analysis, AnalyzeError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockAnalyzer {
    fn new(reply: Result<Analysis, AnalyzeError>) -> Arc<Self> {
        Arc::new(Self { reply: Mutex::new(Some(reply)), calls: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl TextAnalyzer for MockAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis, AnalyzeError> {
        self.calls.lock().unwrap().push(text.to_owned());
        self.reply.lock().unwrap().take().expect("analyzer called more than once")
    }
}

fn state_with(analyzer: &Arc<MockAnalyzer>) -> AppState {
    AppState::new(Some(analyzer.clone()))
}

fn request(text: &str) -> Json<AnalyzeRequest> {
    Json(AnalyzeRequest { text: text.to_owned() })
}

fn sample() -> Analysis {
    Analysis {
        success: true,
        categories: vec![
            CategoryScore { label: "insult".to_owned(), percent: 12.0 },
            CategoryScore { label: "toxic".to_owned(), percent: 45.5 },
        ],
    }
}

#[tokio::test]
async fn blank_text_is_bad_request_without_calling_analyzer() {
    let analyzer = MockAnalyzer::new(Ok(sample()));

    let err = analyze(State(state_with(&analyzer)), request("  \n ")).await.unwrap_err();

    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(analyzer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_analyzer_is_service_unavailable() {
    let err = analyze(State(AppState::default()), request("hello")).await.unwrap_err();

    assert_eq!(err.0, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn analyzer_failure_is_bad_gateway() {
    let analyzer = MockAnalyzer::new(Err(AnalyzeError::Parse(AnalysisError::NoScores)));

    let err = analyze(State(state_with(&analyzer)), request("hello")).await.unwrap_err();

    assert_eq!(err.0, StatusCode::BAD_GATEWAY);
    assert!(!err.1.contains("no category scores"), "upstream detail stays in the log");
}

#[tokio::test]
async fn success_returns_report_for_trimmed_text() {
    let analyzer = MockAnalyzer::new(Ok(sample()));

    let Json(report) = analyze(State(state_with(&analyzer)), request("  you are great  ")).await.unwrap();

    assert_eq!(analyzer.calls.lock().unwrap().as_slice(), &["you are great".to_owned()]);
    assert!(report.success);
    assert!((report.toxicity - 45.5).abs() < f64::EPSILON);
    assert_eq!(report.band, Band::Warning);
    assert_eq!(report.categories.len(), 2);
}

#[tokio::test]
async fn report_serializes_to_wire_shape() {
    let analyzer = MockAnalyzer::new(Ok(sample()));

    let Json(report) = analyze(State(state_with(&analyzer)), request("x")).await.unwrap();
    let body = serde_json::to_value(&report).unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["band"], "warning");
    assert_eq!(body["categories"][1]["label"], "toxic");
    assert_eq!(body["categories"][1]["percent"], 45.5);
}
