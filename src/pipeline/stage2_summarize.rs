use crate::engine::SentimentBackend;
use crate::model::summary::{MetricRow, SentimentLabel, SentimentSummary};

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub summary: SentimentSummary,
    pub label: SentimentLabel,
    pub metrics: Vec<MetricRow>,
}

pub fn run_stage2<B: SentimentBackend + ?Sized>(backend: &B, text: &str) -> Stage2Output {
    let summary = backend.score_text(text);
    let label = SentimentLabel::from_polarity(summary.polarity);
    tracing::info!(
        polarity = summary.polarity,
        subjectivity = summary.subjectivity,
        label = label.name(),
        "whole-text sentiment scored"
    );
    Stage2Output {
        summary,
        label,
        metrics: summarize(&summary),
    }
}

/// Metric/value table rows, always `Polarity` then `Subjectivity`.
pub fn summarize(sentiment: &SentimentSummary) -> Vec<MetricRow> {
    vec![
        MetricRow {
            metric: "Polarity",
            value: sentiment.polarity,
        },
        MetricRow {
            metric: "Subjectivity",
            value: sentiment.subjectivity,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_summarize.rs"]
mod tests;
