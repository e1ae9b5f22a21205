use std::path::Path;

pub mod lexicon;
pub mod pattern;
pub mod vader;

use lexicon::{LexiconError, PatternLexicon, ValenceLexicon};
use pattern::PatternAnalyzer;
use vader::VaderAnalyzer;

use crate::model::summary::SentimentSummary;

/// Scoring capability consumed by the pipeline. Implementations must be
/// deterministic and hold no mutable state.
pub trait SentimentBackend {
    fn score_text(&self, text: &str) -> SentimentSummary;
    fn score_token(&self, token: &str) -> f64;
}

#[derive(Debug, Clone)]
pub struct LexiconBackend {
    pattern: PatternAnalyzer,
    vader: VaderAnalyzer,
}

impl LexiconBackend {
    pub fn new(pattern: PatternAnalyzer, vader: VaderAnalyzer) -> Self {
        Self { pattern, vader }
    }

    pub fn builtin() -> Result<Self, LexiconError> {
        Self::load(None, None)
    }

    /// Built-in lexicons unless an override path is given.
    pub fn load(
        pattern_path: Option<&Path>,
        valence_path: Option<&Path>,
    ) -> Result<Self, LexiconError> {
        let pattern = match pattern_path {
            Some(path) => PatternLexicon::from_path(path)?,
            None => PatternLexicon::builtin()?,
        };
        let valence = match valence_path {
            Some(path) => ValenceLexicon::from_path(path)?,
            None => ValenceLexicon::builtin()?,
        };
        tracing::debug!(
            pattern_entries = pattern.len(),
            valence_entries = valence.len(),
            "lexicons loaded"
        );
        Ok(Self::new(
            PatternAnalyzer::new(pattern),
            VaderAnalyzer::new(valence),
        ))
    }
}

impl SentimentBackend for LexiconBackend {
    fn score_text(&self, text: &str) -> SentimentSummary {
        self.pattern.analyze(text)
    }

    fn score_token(&self, token: &str) -> f64 {
        self.vader.compound(token)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/mod.rs"]
mod tests;
