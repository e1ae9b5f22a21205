pub mod html;
pub mod json;
pub mod text;

use thiserror::Error;

use crate::model::summary::{MetricRow, SentimentLabel, SentimentSummary};
use crate::model::tokens::TokenClassification;

pub const ABOUT_TITLE: &str = "About the Sentiment Analysis App";

pub const ABOUT_TEXT: &str = "\
This app scores the sentiment of any text with two independent lexicon engines.

Features:
- Whole-text analysis: overall polarity (-1 to 1) and subjectivity (0 to 1).
- Token analysis: every whitespace-separated token is scored on its own with a
  compound valence score (-1 to 1) and grouped as positive (> 0.1),
  negative (< -0.1) or neutral.

How to use:
1. Run `kira-sentiment analyze --text \"...\"`, or pass --input FILE, or pipe text on stdin.
2. Pick --format text, json or html (or all together with --out DIR).
3. Read the tables and bar charts in the report.
";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("--format all requires --out")]
    AllNeedsOutDir,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,
    pub n_tokens: usize,
    pub summary: SentimentSummary,
    pub label: SentimentLabel,
    pub metrics: Vec<MetricRow>,
    pub tokens: TokenClassification,
}

impl AnalysisReport {
    pub fn positive_bars(&self) -> Vec<(&str, f64)> {
        self.tokens
            .positives
            .iter()
            .map(|t| (t.token.as_str(), t.score))
            .collect()
    }

    pub fn negative_bars(&self) -> Vec<(&str, f64)> {
        self.tokens
            .negatives
            .iter()
            .map(|t| (t.token.as_str(), t.score))
            .collect()
    }

    pub fn metric_bars(&self) -> Vec<(&str, f64)> {
        self.metrics.iter().map(|m| (m.metric, m.value)).collect()
    }
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
pub(crate) mod tests;
