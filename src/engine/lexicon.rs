use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

const BUILTIN_VALENCE: &str = include_str!("lexicons/valence.tsv");
const BUILTIN_PATTERN: &str = include_str!("lexicons/pattern.tsv");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error reading lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {origin} line {line}: {msg}")]
    Parse {
        origin: String,
        line: usize,
        msg: String,
    },
    #[error("lexicon {0} has no entries")]
    Empty(String),
}

/// Word -> mean valence, in the tab-separated layout of the public VADER
/// lexicon (`token<TAB>mean[<TAB>std<TAB>ratings]`). Extra columns are ignored.
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    entries: HashMap<String, f64>,
}

impl ValenceLexicon {
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::parse(BUILTIN_VALENCE, "builtin valence lexicon")
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let src = read_lexicon(path)?;
        Self::parse(&src, &path.display().to_string())
    }

    pub fn parse(src: &str, origin: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        for (line_no, fields) in data_lines(src) {
            if fields.len() < 2 {
                return Err(parse_error(origin, line_no, "expected token and valence"));
            }
            let valence = parse_number(fields[1], origin, line_no)?;
            entries.insert(fields[0].to_lowercase(), valence);
        }
        if entries.is_empty() {
            return Err(LexiconError::Empty(origin.to_string()));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, word_lower: &str) -> Option<f64> {
        self.entries.get(word_lower).copied()
    }

    pub fn contains(&self, word_lower: &str) -> bool {
        self.entries.contains_key(word_lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl PatternEntry {
    pub fn is_modifier(&self) -> bool {
        self.intensity != 1.0
    }
}

/// Adjective/adverb lexicon: `word<TAB>polarity<TAB>subjectivity[<TAB>intensity]`.
#[derive(Debug, Clone)]
pub struct PatternLexicon {
    entries: HashMap<String, PatternEntry>,
}

impl PatternLexicon {
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::parse(BUILTIN_PATTERN, "builtin pattern lexicon")
    }

    pub fn from_path(path: &Path) -> Result<Self, LexiconError> {
        let src = read_lexicon(path)?;
        Self::parse(&src, &path.display().to_string())
    }

    pub fn parse(src: &str, origin: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();
        for (line_no, fields) in data_lines(src) {
            if fields.len() < 3 {
                return Err(parse_error(
                    origin,
                    line_no,
                    "expected word, polarity and subjectivity",
                ));
            }
            let polarity = parse_number(fields[1], origin, line_no)?;
            let subjectivity = parse_number(fields[2], origin, line_no)?;
            let intensity = match fields.get(3) {
                Some(raw) => parse_number(raw, origin, line_no)?,
                None => 1.0,
            };
            entries.insert(
                fields[0].to_lowercase(),
                PatternEntry {
                    polarity,
                    subjectivity,
                    intensity,
                },
            );
        }
        if entries.is_empty() {
            return Err(LexiconError::Empty(origin.to_string()));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, word_lower: &str) -> Option<&PatternEntry> {
        self.entries.get(word_lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn read_lexicon(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })
}

// Blank lines are skipped; line numbers are 1-based.
fn data_lines(src: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    src.lines().enumerate().filter_map(|(idx, line)| {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            return None;
        }
        let fields = line.split('\t').map(str::trim).collect::<Vec<_>>();
        Some((idx + 1, fields))
    })
}

fn parse_number(raw: &str, origin: &str, line: usize) -> Result<f64, LexiconError> {
    raw.parse::<f64>()
        .map_err(|_| parse_error(origin, line, &format!("invalid number '{raw}'")))
}

fn parse_error(origin: &str, line: usize, msg: &str) -> LexiconError {
    LexiconError::Parse {
        origin: origin.to_string(),
        line,
        msg: msg.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/lexicon.rs"]
mod tests;
