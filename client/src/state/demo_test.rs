use super::*;
use analysis::Band;

fn report(success: bool) -> AnalysisReport {
    AnalysisReport {
        success,
        toxicity: 71.3,
        band: Band::Danger,
        categories: vec![
            CategoryScore { label: "insult".to_owned(), percent: 20.0 },
            CategoryScore { label: "toxic".to_owned(), percent: 71.3 },
        ],
    }
}

#[test]
fn blank_input_does_not_start() {
    let mut demo = DemoState::default();
    assert_eq!(demo.begin("   "), None);
    assert!(!demo.is_visible());
}

#[test]
fn begin_trims_and_shows_analyzing() {
    let mut demo = DemoState::default();
    assert_eq!(demo.begin("  you are great  "), Some("you are great".to_owned()));
    assert!(demo.is_visible());
    assert_eq!(demo.status_text(), "Analyzing...");
    assert_eq!(demo.processing_text(), "0.00s");
}

#[test]
fn second_begin_while_analyzing_is_ignored() {
    let mut demo = DemoState::default();
    demo.begin("one");
    assert_eq!(demo.begin("two"), None);
}

#[test]
fn successful_report_renders_categories_and_time() {
    let mut demo = DemoState::default();
    demo.begin("text");
    demo.finish(Ok(report(true)), 1234.0);

    assert_eq!(demo.status_text(), "Success");
    assert!(demo.status_class().starts_with("bg-green-500"));
    assert_eq!(demo.processing_text(), "1.23s");
    assert_eq!(demo.categories().len(), 2);
    assert_eq!(demo.report().map(|r| r.band), Some(Band::Danger));
}

#[test]
fn unsuccessful_report_reads_failed() {
    let mut demo = DemoState::default();
    demo.begin("text");
    demo.finish(Ok(report(false)), 10.0);

    assert_eq!(demo.status_text(), "Failed");
    assert!(demo.status_class().starts_with("bg-red-500"));
}

#[test]
fn transport_error_reads_error_without_bars() {
    let mut demo = DemoState::default();
    demo.begin("text");
    demo.finish(Err("analyze failed: 502".to_owned()), 10.0);

    assert_eq!(demo.status_text(), "Error");
    assert!(demo.categories().is_empty());
    assert_eq!(demo.processing_text(), "0.00s");

    assert_eq!(demo.begin("retry"), Some("retry".to_owned()), "a failed request can be retried");
}

#[test]
fn format_seconds_rounds_to_two_decimals() {
    assert_eq!(format_seconds(0.0), "0.00s");
    assert_eq!(format_seconds(2005.0), "2.00s");
    assert_eq!(format_seconds(15_678.0), "15.68s");
}
