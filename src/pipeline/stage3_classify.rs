use crate::engine::SentimentBackend;
use crate::model::thresholds::ClassifyThresholds;
use crate::model::tokens::{TokenClassification, TokenScore};

pub fn classify<B: SentimentBackend + ?Sized>(text: &str, backend: &B) -> TokenClassification {
    classify_with(text, backend, &ClassifyThresholds::default_v1())
}

/// Scores every whitespace-delimited token on its own. Punctuation stays
/// attached to the token; bucket order follows input order.
pub fn classify_with<B: SentimentBackend + ?Sized>(
    text: &str,
    backend: &B,
    thresholds: &ClassifyThresholds,
) -> TokenClassification {
    let mut out = TokenClassification::default();

    for token in text.split_whitespace() {
        let score = backend.score_token(token);
        tracing::debug!(token, score, "token scored");
        if score > thresholds.positive {
            out.positives.push(TokenScore {
                token: token.to_string(),
                score,
            });
        } else if score < thresholds.negative {
            out.negatives.push(TokenScore {
                token: token.to_string(),
                score,
            });
        } else {
            out.neutrals.push(token.to_string());
        }
    }

    if out.is_empty() {
        tracing::debug!("no tokens to classify");
    }
    tracing::info!(
        positives = out.positives.len(),
        negatives = out.negatives.len(),
        neutrals = out.neutrals.len(),
        "tokens classified"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
