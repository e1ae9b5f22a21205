use super::*;
use crate::report::tests::sample_report;

#[test]
fn test_html_page_structure() {
    let html = render_report_html(&sample_report(), "the food was great! <bad>");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Sentiment Analysis NLP App</h1>"));
    assert!(html.contains("<h3>Sentiment: Positive"));
    assert!(html.contains("<tr><td>Polarity</td><td>0.5000</td></tr>"));
    assert!(html.contains("<tr><td>Subjectivity</td><td>0.8000</td></tr>"));
    assert!(html.contains("Positive Token Sentiments"));
    assert!(html.contains("Negative Token Sentiments"));
    assert!(html.contains("<h4>Neutrals (3)</h4>\n<p>the, food, was</p>"));
    assert!(html.contains(ABOUT_TITLE));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_html_escapes_user_text() {
    let html = render_report_html(&sample_report(), "<script>alert('x')</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("<td>&lt;bad&gt;</td>"));
}

#[test]
fn test_chart_colors() {
    let html = render_report_html(&sample_report(), "");
    assert!(html.contains("fill=\"#1f77b4\""));
    assert!(html.contains("fill=\"#ff7f0e\""));
    assert!(html.contains("fill=\"green\""));
    assert!(html.contains("fill=\"red\""));
}

#[test]
fn test_svg_chart_empty_and_mixed_sign() {
    let empty = svg_bar_chart("Empty", &[], &["green"]);
    assert!(empty.contains("(no data)"));
    assert!(!empty.contains("<svg"));

    let mixed = svg_bar_chart("Mixed", &[("up", 0.5), ("down", -0.5)], &["green"]);
    assert_eq!(mixed.matches("<rect").count(), 2);
    // zero line sits halfway: pad 30 + plot 160 * 0.5
    assert!(mixed.contains("y1=\"110.0\""));
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
    assert_eq!(escape_html("plain"), "plain");
}
