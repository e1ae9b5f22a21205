use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::report::html::render_report_html;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{AnalysisReport, ReportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Html,
    All,
}

impl ReportFormat {
    fn includes(self, other: ReportFormat) -> bool {
        self == other || self == ReportFormat::All
    }
}

/// Writes `report.txt`, `summary.json` and/or `report.html` into `out_dir`.
pub fn write_reports(
    report: &AnalysisReport,
    text: &str,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|e| io_error(out_dir, e))?;
    let mut written = Vec::new();

    if format.includes(ReportFormat::Text) {
        let path = out_dir.join("report.txt");
        write_text(&path, &render_report_text(report))?;
        written.push(path);
    }
    if format.includes(ReportFormat::Json) {
        let path = out_dir.join("summary.json");
        write_text(&path, &render_summary_json(report)?)?;
        written.push(path);
    }
    if format.includes(ReportFormat::Html) {
        let path = out_dir.join("report.html");
        write_text(&path, &render_report_html(report, text))?;
        written.push(path);
    }

    for path in &written {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(written)
}

pub fn render_to_string(
    report: &AnalysisReport,
    text: &str,
    format: ReportFormat,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_report_text(report)),
        ReportFormat::Json => Ok(render_summary_json(report)?),
        ReportFormat::Html => Ok(render_report_html(report, text)),
        ReportFormat::All => Err(ReportError::AllNeedsOutDir),
    }
}

pub fn print_report(
    report: &AnalysisReport,
    text: &str,
    format: ReportFormat,
) -> Result<(), ReportError> {
    let rendered = render_to_string(report, text, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| ReportError::Io {
            path: "stdout".to_string(),
            source: e,
        })
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
