mod engine;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::engine::{LexiconBackend, SentimentBackend};
use crate::error::AppError;
use crate::input::{TextSource, load_text};
use crate::pipeline::stage2_summarize::run_stage2;
use crate::pipeline::stage3_classify::classify;
use crate::pipeline::stage4_report::{ReportFormat, print_report, write_reports};
use crate::report::text::render_about_text;
use crate::report::{AnalysisReport, ReportError};

#[derive(Debug, Parser)]
#[command(
    name = "kira-sentiment",
    version,
    about = "Whole-text and per-token sentiment analysis with text, JSON and HTML reports."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). KIRA_SENTIMENT_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one text and render the report.
    Analyze(AnalyzeArgs),
    /// Print what the analysis does and how to use it.
    About,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Text to analyze.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Read text from FILE (`.gz` accepted, `-` for stdin). Stdin when neither is given.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write reports into DIR instead of printing to stdout.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Replace the built-in valence lexicon (token<TAB>mean[...]).
    #[arg(long, value_name = "FILE")]
    vader_lexicon: Option<PathBuf>,

    /// Replace the built-in pattern lexicon (word<TAB>polarity<TAB>subjectivity[<TAB>intensity]).
    #[arg(long, value_name = "FILE")]
    pattern_lexicon: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    source: TextSource,
    out_dir: Option<PathBuf>,
    format: ReportFormat,
    valence_lexicon: Option<PathBuf>,
    pattern_lexicon: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    logging::init(cli.verbose)?;
    match cli.command {
        Command::About => {
            print!("{}", render_about_text());
            Ok(())
        }
        Command::Analyze(args) => analyze(&build_config(args)?),
    }
}

fn build_config(args: AnalyzeArgs) -> Result<RunConfig, AppError> {
    let source = match (args.text, args.input) {
        (Some(text), _) => TextSource::Inline(text),
        (None, Some(path)) if path == Path::new("-") => TextSource::Stdin,
        (None, Some(path)) => TextSource::File(path),
        (None, None) => TextSource::Stdin,
    };
    if args.format == ReportFormat::All && args.out.is_none() {
        return Err(ReportError::AllNeedsOutDir.into());
    }
    Ok(RunConfig {
        source,
        out_dir: args.out,
        format: args.format,
        valence_lexicon: args.vader_lexicon,
        pattern_lexicon: args.pattern_lexicon,
    })
}

fn analyze(config: &RunConfig) -> Result<(), AppError> {
    let input = load_text(&config.source)?;
    let backend = LexiconBackend::load(
        config.pattern_lexicon.as_deref(),
        config.valence_lexicon.as_deref(),
    )?;
    let report = analyze_text(&backend, &input.text, &input.source);

    match &config.out_dir {
        Some(dir) => {
            write_reports(&report, &input.text, dir, config.format)?;
        }
        None => print_report(&report, &input.text, config.format)?,
    }
    Ok(())
}

fn analyze_text<B: SentimentBackend + ?Sized>(
    backend: &B,
    text: &str,
    source: &str,
) -> AnalysisReport {
    let stage2 = run_stage2(backend, text);
    let tokens = classify(text, backend);
    AnalysisReport {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        source: source.to_string(),
        n_tokens: tokens.n_tokens(),
        summary: stage2.summary,
        label: stage2.label,
        metrics: stage2.metrics,
        tokens,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
