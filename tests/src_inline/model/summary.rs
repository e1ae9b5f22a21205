use super::*;

#[test]
fn test_label_from_polarity() {
    assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::from_polarity(0.3), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::from_polarity(-0.2), SentimentLabel::Negative);
}

#[test]
fn test_label_has_no_epsilon() {
    assert_eq!(
        SentimentLabel::from_polarity(1e-12),
        SentimentLabel::Positive
    );
    assert_eq!(
        SentimentLabel::from_polarity(-1e-12),
        SentimentLabel::Negative
    );
    assert_eq!(SentimentLabel::from_polarity(-0.0), SentimentLabel::Neutral);
}

#[test]
fn test_label_names() {
    assert_eq!(SentimentLabel::Positive.name(), "Positive");
    assert_eq!(SentimentLabel::Negative.name(), "Negative");
    assert_eq!(SentimentLabel::Neutral.name(), "Neutral");
}
