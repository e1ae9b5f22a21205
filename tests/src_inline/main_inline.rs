use super::*;
use crate::model::summary::SentimentLabel;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("kira-sentiment").chain(args.iter().copied()))
}

fn analyze_args(args: &[&str]) -> AnalyzeArgs {
    let mut full = vec!["analyze"];
    full.extend_from_slice(args);
    match parse(&full).unwrap().command {
        Command::Analyze(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_defaults_to_stdin_text_report() {
    let config = build_config(analyze_args(&[])).unwrap();
    assert_eq!(config.source, TextSource::Stdin);
    assert_eq!(config.format, ReportFormat::Text);
    assert_eq!(config.out_dir, None);
}

#[test]
fn test_parse_inline_text() {
    let config = build_config(analyze_args(&["--text", "good day", "--format", "json"])).unwrap();
    assert_eq!(config.source, TextSource::Inline("good day".to_string()));
    assert_eq!(config.format, ReportFormat::Json);
}

#[test]
fn test_parse_input_file_and_dash() {
    let config = build_config(analyze_args(&["--input", "review.txt.gz"])).unwrap();
    assert_eq!(
        config.source,
        TextSource::File(PathBuf::from("review.txt.gz"))
    );
    let config = build_config(analyze_args(&["--input", "-"])).unwrap();
    assert_eq!(config.source, TextSource::Stdin);
}

#[test]
fn test_text_and_input_conflict() {
    assert!(parse(&["analyze", "--text", "a", "--input", "b.txt"]).is_err());
}

#[test]
fn test_format_all_requires_out() {
    let err = build_config(analyze_args(&["--format", "all"])).unwrap_err();
    assert!(matches!(
        err,
        AppError::Report(ReportError::AllNeedsOutDir)
    ));
    let config = build_config(analyze_args(&["--format", "all", "--out", "out"])).unwrap();
    assert_eq!(config.out_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_lexicon_overrides_and_verbosity() {
    let cli = parse(&[
        "-vv",
        "analyze",
        "--vader-lexicon",
        "v.tsv",
        "--pattern-lexicon",
        "p.tsv",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    let Command::Analyze(args) = cli.command else {
        panic!("expected analyze");
    };
    let config = build_config(args).unwrap();
    assert_eq!(config.valence_lexicon, Some(PathBuf::from("v.tsv")));
    assert_eq!(config.pattern_lexicon, Some(PathBuf::from("p.tsv")));
}

#[test]
fn test_about_command() {
    assert!(matches!(parse(&["about"]).unwrap().command, Command::About));
}

#[test]
fn test_analyze_text_builds_report() {
    let backend = LexiconBackend::builtin().unwrap();
    let report = analyze_text(&backend, "The food was great! but service was terrible", "inline");
    assert_eq!(report.tool_name, "kira-sentiment");
    assert_eq!(report.n_tokens, 8);
    assert_eq!(report.metrics[0].metric, "Polarity");
    assert_eq!(report.metrics[1].metric, "Subjectivity");
    assert_eq!(report.metrics[0].value, report.summary.polarity);
    assert_eq!(report.tokens.positives.len(), 1);
    assert_eq!(report.tokens.negatives.len(), 1);
    assert_eq!(report.tokens.neutrals.len(), 6);
    // great (0.8) and terrible (-1.0) average below zero
    assert_eq!(report.label, SentimentLabel::Negative);
}

#[test]
fn test_analyze_empty_text() {
    let backend = LexiconBackend::builtin().unwrap();
    let report = analyze_text(&backend, "", "stdin");
    assert_eq!(report.n_tokens, 0);
    assert_eq!(report.label, SentimentLabel::Neutral);
    assert!(report.tokens.is_empty());
}

#[test]
fn test_log_directive() {
    assert_eq!(logging::default_directive(0), "warn");
    assert_eq!(logging::default_directive(1), "info");
    assert_eq!(logging::default_directive(5), "debug");
}
