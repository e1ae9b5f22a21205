use std::fmt::Write;

use crate::report::{ABOUT_TEXT, ABOUT_TITLE, AnalysisReport, format_f64_4};

const METRIC_COLORS: &[&str] = &["#1f77b4", "#ff7f0e"];
const POSITIVE_COLOR: &str = "green";
const NEGATIVE_COLOR: &str = "red";

const CHART_HEIGHT: f64 = 220.0;
const CHART_PAD: f64 = 30.0;
const BAR_WIDTH: f64 = 36.0;
const BAR_GAP: f64 = 14.0;

const STYLE: &str = "\
body { font-family: sans-serif; background: #f0f2f6; margin: 0; padding: 2rem; }
h1 { margin-top: 0; }
.columns { display: flex; gap: 2rem; flex-wrap: wrap; }
.column { flex: 1 1 28rem; background: #ffffff; border-radius: 4px; padding: 1rem; }
.info { background: #e8f0fe; border-radius: 4px; padding: 0.5rem 1rem; }
table { border-collapse: collapse; margin: 0.5rem 0 1rem; }
th, td { border: 1px solid #d0d4dc; padding: 0.25rem 0.75rem; text-align: left; }
pre.input { white-space: pre-wrap; background: #f9f9f9; padding: 0.5rem; }
.about { font-size: 18px; line-height: 1.6; white-space: pre-wrap; }
";

pub fn render_report_html(report: &AnalysisReport, text: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Sentiment Analysis App</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str("<h1>Sentiment Analysis NLP App</h1>\n");
    out.push_str("<h2>Home - Sentiment Analysis</h2>\n");
    let _ = writeln!(
        out,
        "<p>Input: {} ({} tokens)</p>\n<pre class=\"input\">{}</pre>",
        escape_html(&report.source),
        report.n_tokens,
        escape_html(text)
    );

    out.push_str("<div class=\"columns\">\n");

    out.push_str("<div class=\"column\">\n<p class=\"info\">Whole-text Sentiment Analysis</p>\n");
    let _ = writeln!(
        out,
        "<h3>Sentiment: {} {}</h3>",
        report.label.name(),
        report.label.emoji()
    );
    out.push_str("<table>\n<tr><th>Metric</th><th>Value</th></tr>\n");
    for m in &report.metrics {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            m.metric,
            format_f64_4(m.value)
        );
    }
    out.push_str("</table>\n");
    out.push_str(&svg_bar_chart(
        "Sentiment Analysis Visualization",
        &report.metric_bars(),
        METRIC_COLORS,
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"column\">\n<p class=\"info\">Token Sentiment Analysis</p>\n");
    push_token_table(&mut out, "Positives", &report.positive_bars());
    push_token_table(&mut out, "Negatives", &report.negative_bars());
    let _ = writeln!(out, "<h4>Neutrals ({})</h4>", report.tokens.neutrals.len());
    let neutrals = report
        .tokens
        .neutrals
        .iter()
        .map(|t| escape_html(t))
        .collect::<Vec<_>>();
    let _ = writeln!(out, "<p>{}</p>", neutrals.join(", "));
    out.push_str(&svg_bar_chart(
        "Positive Token Sentiments",
        &report.positive_bars(),
        &[POSITIVE_COLOR],
    ));
    out.push_str(&svg_bar_chart(
        "Negative Token Sentiments",
        &report.negative_bars(),
        &[NEGATIVE_COLOR],
    ));
    out.push_str("</div>\n");

    out.push_str("</div>\n");

    let _ = writeln!(
        out,
        "<h2>About</h2>\n<h3>{}</h3>\n<div class=\"about\">{}</div>",
        ABOUT_TITLE,
        escape_html(ABOUT_TEXT)
    );
    let _ = writeln!(
        out,
        "<footer><small>{} {}</small></footer>",
        escape_html(&report.tool_name),
        escape_html(&report.tool_version)
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn push_token_table(out: &mut String, title: &str, bars: &[(&str, f64)]) {
    let _ = writeln!(out, "<h4>{} ({})</h4>", title, bars.len());
    if bars.is_empty() {
        out.push_str("<p>(none)</p>\n");
        return;
    }
    out.push_str("<table>\n<tr><th>Token</th><th>Score</th></tr>\n");
    for (token, score) in bars {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(token),
            format_f64_4(*score)
        );
    }
    out.push_str("</table>\n");
}

/// Vertical bars on a shared zero line; colors cycle through `colors`.
fn svg_bar_chart(title: &str, bars: &[(&str, f64)], colors: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<figure>\n<figcaption>{}</figcaption>", escape_html(title));
    if bars.is_empty() {
        out.push_str("<p>(no data)</p>\n</figure>\n");
        return out;
    }

    let values = bars
        .iter()
        .map(|(_, v)| if v.is_finite() { *v } else { 0.0 })
        .collect::<Vec<_>>();
    let max = values.iter().copied().fold(0.0f64, f64::max);
    let min = values.iter().copied().fold(0.0f64, f64::min);
    let span = if max - min > 0.0 { max - min } else { 1.0 };
    let plot = CHART_HEIGHT - 2.0 * CHART_PAD;
    let zero_y = CHART_PAD + plot * (max / span);
    let width = BAR_GAP + bars.len() as f64 * (BAR_WIDTH + BAR_GAP);

    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" role=\"img\">",
        width, CHART_HEIGHT
    );
    for (i, ((label, _), value)) in bars.iter().zip(&values).enumerate() {
        let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
        let h = plot * (value.abs() / span);
        let y = if *value >= 0.0 { zero_y - h } else { zero_y };
        let color = colors[i % colors.len()];
        let _ = writeln!(
            out,
            "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{BAR_WIDTH:.1}\" height=\"{h:.1}\" fill=\"{color}\"><title>{}: {}</title></rect>",
            escape_html(label),
            format_f64_4(*value)
        );
        let _ = writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{}</text>",
            x + BAR_WIDTH / 2.0,
            CHART_HEIGHT - 8.0,
            escape_html(label)
        );
    }
    let _ = writeln!(
        out,
        "<line x1=\"0\" y1=\"{zero_y:.1}\" x2=\"{width:.1}\" y2=\"{zero_y:.1}\" stroke=\"#444\"/>"
    );
    out.push_str("</svg>\n</figure>\n");
    out
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
