use std::path::Path;

use thiserror::Error;

use crate::model::history::SessionRecord;
use crate::model::transcript::Transcript;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn read_text(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// One answer per non-blank line; surrounding whitespace is trimmed.
pub fn parse_answers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_answers(path: &Path) -> Result<Vec<String>, InputError> {
    let answers = parse_answers(&read_text(path)?);
    if answers.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "answers file {} contains no answers",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), answers = answers.len(), "loaded answers");
    Ok(answers)
}

pub fn load_transcript(path: &Path) -> Result<Transcript, InputError> {
    let transcript: Transcript = serde_json::from_str(&read_text(path)?)?;
    tracing::debug!(path = %path.display(), turns = transcript.len(), "loaded transcript");
    Ok(transcript)
}

pub fn load_history(path: &Path) -> Result<Vec<SessionRecord>, InputError> {
    let records: Vec<SessionRecord> = serde_json::from_str(&read_text(path)?)?;
    tracing::debug!(path = %path.display(), sessions = records.len(), "loaded history");
    Ok(records)
}

/// Like [`load_history`], but a missing file is an empty history.
pub fn load_history_or_empty(path: &Path) -> Result<Vec<SessionRecord>, InputError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_history(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
