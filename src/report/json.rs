use serde::Serialize;

use crate::model::summary::MetricRow;
use crate::model::tokens::TokenClassification;
use crate::report::AnalysisReport;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'a str,
    version: &'a str,
    input: &'a str,
    n_tokens: usize,
    sentiment: SentimentJson,
    metrics: &'a [MetricRow],
    tokens: &'a TokenClassification,
}

#[derive(Debug, Serialize)]
struct SentimentJson {
    polarity: f64,
    subjectivity: f64,
    label: &'static str,
}

pub fn render_summary_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    let doc = SummaryJson {
        tool: &report.tool_name,
        version: &report.tool_version,
        input: &report.source,
        n_tokens: report.n_tokens,
        sentiment: SentimentJson {
            polarity: report.summary.polarity,
            subjectivity: report.summary.subjectivity,
            label: report.label.name(),
        },
        metrics: &report.metrics,
        tokens: &report.tokens,
    };
    let mut json = serde_json::to_string_pretty(&doc)?;
    json.push('\n');
    Ok(json)
}
