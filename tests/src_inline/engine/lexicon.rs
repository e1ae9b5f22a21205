use super::*;

#[test]
fn test_builtin_lexicons_load() {
    let valence = ValenceLexicon::builtin().unwrap();
    assert!(valence.len() > 100);
    assert_eq!(valence.get("great"), Some(3.1));
    assert!(valence.contains(":)"));

    let pattern = PatternLexicon::builtin().unwrap();
    assert!(pattern.len() > 50);
    let very = pattern.get("very").unwrap();
    assert!(very.is_modifier());
    assert!(!pattern.get("good").unwrap().is_modifier());
}

#[test]
fn test_valence_parse_ignores_extra_columns_and_lowercases() {
    let src = "Happy\t2.7\t0.78\t[3, 2, 3]\n\n:D\t2.9\n";
    let lex = ValenceLexicon::parse(src, "inline").unwrap();
    assert_eq!(lex.len(), 2);
    assert_eq!(lex.get("happy"), Some(2.7));
    assert_eq!(lex.get(":d"), Some(2.9));
}

#[test]
fn test_valence_parse_reports_line() {
    let src = "good\t1.9\nbad\tnope\n";
    match ValenceLexicon::parse(src, "inline") {
        Err(LexiconError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_empty_lexicon_rejected() {
    assert!(matches!(
        ValenceLexicon::parse("\n\n", "inline"),
        Err(LexiconError::Empty(_))
    ));
    assert!(matches!(
        PatternLexicon::parse("", "inline"),
        Err(LexiconError::Empty(_))
    ));
}

#[test]
fn test_pattern_intensity_defaults_to_one() {
    let lex = PatternLexicon::parse("good\t0.7\t0.6\n", "inline").unwrap();
    let entry = lex.get("good").unwrap();
    assert_eq!(entry.intensity, 1.0);
    assert!(matches!(
        PatternLexicon::parse("good\t0.7\n", "inline"),
        Err(LexiconError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("kira_sentiment_missing_lexicon.tsv");
    assert!(matches!(
        ValenceLexicon::from_path(&path),
        Err(LexiconError::Io { .. })
    ));
}
