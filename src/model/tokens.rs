use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenScore {
    pub token: String,
    pub score: f64,
}

/// Token buckets in input order. Neutral tokens carry no score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenClassification {
    pub positives: Vec<TokenScore>,
    pub negatives: Vec<TokenScore>,
    pub neutrals: Vec<String>,
}

impl TokenClassification {
    pub fn n_tokens(&self) -> usize {
        self.positives.len() + self.negatives.len() + self.neutrals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_tokens() == 0
    }
}
