use crate::engine::lexicon::PatternLexicon;
use crate::model::summary::SentimentSummary;

const NEGATIONS: &[&str] = &["no", "not", "never", "n't"];
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

/// Averages lexicon assessments over the text. An intensifier merges with
/// the next scored word; a negation halves and flips that word's polarity.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    lexicon: PatternLexicon,
}

impl PatternAnalyzer {
    pub fn new(lexicon: PatternLexicon) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, text: &str) -> SentimentSummary {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return SentimentSummary {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let n = assessments.len() as f64;
        let mut polarity = 0.0;
        let mut subjectivity = 0.0;
        for a in &assessments {
            polarity += if a.negated {
                a.polarity * NEGATION_FACTOR
            } else {
                a.polarity
            };
            subjectivity += a.subjectivity;
        }

        SentimentSummary {
            polarity: (polarity / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity / n).clamp(0.0, 1.0),
        }
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let mut out: Vec<Assessment> = Vec::new();
        let mut modifier_open = false;
        let mut negation_open = false;

        for raw in text.split_whitespace() {
            let word = normalize_word(raw);
            if word.is_empty() {
                continue;
            }

            let Some(entry) = self.lexicon.get(&word) else {
                if is_negation(&word) {
                    negation_open = true;
                } else if word.chars().count() > 1 {
                    // Short filler words ("a", "is") keep an open negation.
                    negation_open = false;
                }
                if word.chars().count() > 2 {
                    modifier_open = false;
                }
                continue;
            };

            let merged = match out.last_mut() {
                Some(last) if modifier_open => {
                    last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                    last.subjectivity = (entry.subjectivity * last.intensity).clamp(0.0, 1.0);
                    last.intensity = entry.intensity;
                    last.negated |= negation_open;
                    true
                }
                _ => false,
            };
            if !merged {
                out.push(Assessment {
                    polarity: entry.polarity,
                    subjectivity: entry.subjectivity,
                    intensity: entry.intensity,
                    negated: negation_open,
                });
            }

            negation_open = false;
            modifier_open = entry.is_modifier();
        }

        out
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

fn normalize_word(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/pattern.rs"]
mod tests;
