use crate::model::transcript::Transcript;
use crate::report::ResultsSummary;

pub fn render_summary_json(summary: &ResultsSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

pub fn render_transcript_json(transcript: &Transcript) -> serde_json::Result<String> {
    serde_json::to_string_pretty(transcript)
}
