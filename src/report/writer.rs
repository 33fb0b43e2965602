use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::{InputError, load_history_or_empty};
use crate::model::history::SessionRecord;
use crate::model::transcript::Transcript;
use crate::report::ResultsSummary;
use crate::report::json::{render_summary_json, render_transcript_json};
use crate::report::text::render_report_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub transcript: PathBuf,
    pub results: PathBuf,
    pub report: PathBuf,
}

pub fn write_session_reports(
    out_dir: &Path,
    transcript: &Transcript,
    summary: &ResultsSummary,
) -> Result<WrittenReports, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let transcript_path = out_dir.join("transcript.json");
    write_text(&transcript_path, &render_transcript_json(transcript)?)?;

    let results_path = out_dir.join("results.json");
    write_text(&results_path, &render_summary_json(summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;

    tracing::info!(out = %out_dir.display(), "reports written");
    Ok(WrittenReports {
        transcript: transcript_path,
        results: results_path,
        report: report_path,
    })
}

/// Appends `record` to the JSON history at `path`, creating it if needed.
pub fn append_history(path: &Path, record: SessionRecord) -> Result<usize, ReportError> {
    let mut records = load_history_or_empty(path)?;
    records.push(record);
    let json = serde_json::to_string_pretty(&records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_text(path, &json)?;
    tracing::info!(path = %path.display(), sessions = records.len(), "history updated");
    Ok(records.len())
}

pub fn write_text(path: &Path, content: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    w.write_all(content.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/writer.rs"]
mod tests;
