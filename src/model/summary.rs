use serde::Serialize;

/// Whole-text sentiment as produced by the pattern engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Exact comparison with zero; a polarity of 0.0 is always `Neutral`.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "\u{1F603}",
            SentimentLabel::Negative => "\u{1F620}",
            SentimentLabel::Neutral => "\u{1F610}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub value: f64,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/summary.rs"]
mod tests;
