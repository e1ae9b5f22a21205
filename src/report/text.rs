use crate::model::tokens::TokenScore;
use crate::report::{ABOUT_TEXT, ABOUT_TITLE, AnalysisReport, format_f64_4};

const BAR_WIDTH: usize = 40;

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Sentiment Analysis Report\n");
    out.push_str("=========================\n\n");
    out.push_str(&format!(
        "Input: {} ({} tokens)\n\n",
        report.source, report.n_tokens
    ));

    out.push_str("1. Whole-text sentiment\n");
    out.push_str(&format!(
        "Sentiment: {} {}\n\n",
        report.label.name(),
        report.label.emoji()
    ));
    let metric_rows = report
        .metrics
        .iter()
        .map(|m| (m.metric.to_string(), format_f64_4(m.value)))
        .collect::<Vec<_>>();
    push_table(&mut out, ("Metric", "Value"), &metric_rows);
    out.push('\n');
    push_bar_chart(&mut out, "Sentiment Analysis Visualization", &report.metric_bars());
    out.push('\n');

    out.push_str("2. Token sentiment\n");
    push_token_table(&mut out, "Positives", &report.tokens.positives);
    push_token_table(&mut out, "Negatives", &report.tokens.negatives);
    out.push_str(&format!("Neutrals ({})\n", report.tokens.neutrals.len()));
    if report.tokens.neutrals.is_empty() {
        out.push_str("(none)\n");
    } else {
        out.push_str(&report.tokens.neutrals.join(", "));
        out.push('\n');
    }
    out.push('\n');

    push_bar_chart(&mut out, "Positive Token Sentiments", &report.positive_bars());
    out.push('\n');
    push_bar_chart(&mut out, "Negative Token Sentiments", &report.negative_bars());

    out
}

pub fn render_about_text() -> String {
    format!("{}\n{}\n\n{}", ABOUT_TITLE, "=".repeat(ABOUT_TITLE.len()), ABOUT_TEXT)
}

fn push_token_table(out: &mut String, title: &str, tokens: &[TokenScore]) {
    out.push_str(&format!("{} ({})\n", title, tokens.len()));
    if tokens.is_empty() {
        out.push_str("(none)\n\n");
        return;
    }
    let rows = tokens
        .iter()
        .map(|t| (t.token.clone(), format_f64_4(t.score)))
        .collect::<Vec<_>>();
    push_table(out, ("Token", "Score"), &rows);
    out.push('\n');
}

fn push_table(out: &mut String, header: (&str, &str), rows: &[(String, String)]) {
    let width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(header.0.chars().count()))
        .max()
        .unwrap_or(0);
    out.push_str(&format!("{:<width$}  {}\n", header.0, header.1));
    for (key, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", key, value));
    }
}

fn push_bar_chart(out: &mut String, title: &str, bars: &[(&str, f64)]) {
    out.push_str(title);
    out.push('\n');
    if bars.is_empty() {
        out.push_str("(no data)\n");
        return;
    }
    let width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in bars {
        out.push_str(&format!(
            "{:<width$} | {:<bar_width$} {}\n",
            label,
            bar(*value),
            format_f64_4(*value),
            bar_width = BAR_WIDTH
        ));
    }
}

/// Bar length follows the absolute value, saturating at 1.0.
fn bar(value: f64) -> String {
    let magnitude = if value.is_finite() {
        value.abs().min(1.0)
    } else {
        0.0
    };
    "#".repeat((magnitude * BAR_WIDTH as f64).round() as usize)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
