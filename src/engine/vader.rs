use crate::engine::lexicon::ValenceLexicon;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const EXCLAIM_STEP: f64 = 0.292;
const EXCLAIM_MAX: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "uh-uh", "wasnt",
    "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

const BOOST_UP: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fabulously",
    "fully",
    "greatly",
    "hella",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "uber",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

const BOOST_DOWN: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "kindof",
    "kind-of",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
    "sortof",
    "sort-of",
];

/// Valence-lexicon analyzer producing a normalized compound score.
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    lexicon: ValenceLexicon,
}

impl VaderAnalyzer {
    pub fn new(lexicon: ValenceLexicon) -> Self {
        Self { lexicon }
    }

    /// Compound score in [-1, 1]; 0.0 when no word carries valence.
    pub fn compound(&self, text: &str) -> f64 {
        let words = text
            .split_whitespace()
            .map(strip_punc_if_word)
            .collect::<Vec<_>>();
        if words.is_empty() {
            return 0.0;
        }
        let cap_diff = allcap_differential(&words);

        let mut sum = 0.0;
        for (i, word) in words.iter().enumerate() {
            let lower = word.to_lowercase();
            if booster_scalar(&lower).is_some() {
                continue;
            }
            sum += self.word_valence(&words, i, &lower, cap_diff);
        }

        if sum == 0.0 {
            return 0.0;
        }
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }
        normalize(sum)
    }

    fn word_valence(&self, words: &[&str], i: usize, lower: &str, cap_diff: bool) -> f64 {
        let Some(mut valence) = self.lexicon.get(lower) else {
            return 0.0;
        };

        // "no" directly before another sentiment word only negates it.
        if lower == "no"
            && words
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains(&next.to_lowercase()))
        {
            return 0.0;
        }

        if cap_diff && is_all_caps(words[i]) {
            valence += C_INCR.copysign(valence);
        }

        for distance in 1..=3usize {
            if i < distance {
                break;
            }
            let prev = words[i - distance];
            let prev_lower = prev.to_lowercase();
            if self.lexicon.contains(&prev_lower) {
                continue;
            }
            let mut scalar = booster_for(prev, &prev_lower, valence, cap_diff);
            if scalar != 0.0 {
                scalar *= match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
            }
            valence += scalar;

            if is_negated(&prev_lower) {
                let emphatic_never = prev_lower == "never"
                    && words[i - distance + 1..i]
                        .iter()
                        .any(|w| matches!(w.to_lowercase().as_str(), "so" | "this"));
                if emphatic_never {
                    valence *= 1.25;
                } else {
                    valence *= N_SCALAR;
                }
            }
        }

        valence
    }
}

fn booster_scalar(lower: &str) -> Option<f64> {
    if BOOST_UP.contains(&lower) {
        Some(B_INCR)
    } else if BOOST_DOWN.contains(&lower) {
        Some(B_DECR)
    } else {
        None
    }
}

fn booster_for(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster_scalar(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(word) {
        scalar += C_INCR.copysign(valence);
    }
    scalar
}

fn is_negated(lower: &str) -> bool {
    NEGATE.contains(&lower) || lower.contains("n't")
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn allcap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

/// Leading/trailing punctuation is dropped unless that leaves two characters
/// or fewer, which keeps emoticons like ":)" intact.
fn strip_punc_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.chars().filter(|&c| c == '!').count().min(EXCLAIM_MAX);
    let questions = text.chars().filter(|&c| c == '?').count();
    let question_amp = if questions > 1 {
        if questions <= 3 {
            questions as f64 * QUESTION_STEP
        } else {
            QUESTION_CAP
        }
    } else {
        0.0
    };
    exclaims as f64 * EXCLAIM_STEP + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/vader.rs"]
mod tests;
