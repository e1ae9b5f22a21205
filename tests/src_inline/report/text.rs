use super::*;
use crate::report::tests::sample_report;

#[test]
fn test_text_report_sections() {
    let text = render_report_text(&sample_report());
    assert!(text.starts_with("Sentiment Analysis Report\n"));
    assert!(text.contains("Input: inline (5 tokens)"));
    assert!(text.contains("Sentiment: Positive"));
    assert!(text.contains("Metric        Value\n"));
    assert!(text.contains("Polarity      0.5000\n"));
    assert!(text.contains("Subjectivity  0.8000\n"));
    assert!(text.contains("Positives (1)\n"));
    assert!(text.contains("Negatives (1)\n"));
    assert!(text.contains("Neutrals (3)\nthe, food, was\n"));
    assert!(text.contains("Positive Token Sentiments\n"));
    assert!(text.contains("Negative Token Sentiments\n"));
}

#[test]
fn test_bar_length_follows_magnitude() {
    assert_eq!(bar(0.5).len(), 20);
    assert_eq!(bar(-0.5).len(), 20);
    assert_eq!(bar(3.0).len(), BAR_WIDTH);
    assert_eq!(bar(0.0), "");
    assert_eq!(bar(f64::NAN), "");
}

#[test]
fn test_empty_buckets_render_placeholders() {
    let mut report = sample_report();
    report.tokens.positives.clear();
    report.tokens.negatives.clear();
    report.tokens.neutrals.clear();
    let text = render_report_text(&report);
    assert!(text.contains("Positives (0)\n(none)\n"));
    assert!(text.contains("Neutrals (0)\n(none)\n"));
    assert!(text.contains("Positive Token Sentiments\n(no data)\n"));
}

#[test]
fn test_about_text() {
    let about = render_about_text();
    assert!(about.starts_with(ABOUT_TITLE));
    assert!(about.contains("How to use:"));
}
