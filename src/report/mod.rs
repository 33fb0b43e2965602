pub mod csv;
pub mod feedback;
pub mod json;
pub mod text;
pub mod writer;

use serde::Serialize;

use crate::model::history::SessionRecord;
use crate::model::rules::ScoringRules;
use crate::model::score::{ScoreBreakdown, ScoreSignals};
use crate::model::transcript::Transcript;
use crate::pipeline::scorer::collect_signals;
use crate::pipeline::session::EndReason;
use crate::report::feedback::{Feedback, build_feedback};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub startup: String,
    pub persona_id: String,
    pub persona_name: String,
    pub end_reason: Option<EndReason>,
    pub duration: String,
    pub questions_answered: usize,
    pub questions_total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsSummary {
    pub tool: ToolMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionInfo>,
    pub breakdown: ScoreBreakdown,
    pub signals: ScoreSignals,
    pub feedback: Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<SessionRecord>,
}

pub fn build_summary(
    transcript: &Transcript,
    breakdown: &ScoreBreakdown,
    rules: &ScoringRules,
    session: Option<SessionInfo>,
    record: Option<SessionRecord>,
) -> ResultsSummary {
    ResultsSummary {
        tool: ToolMeta::current(),
        session,
        breakdown: breakdown.clone(),
        signals: collect_signals(transcript, rules),
        feedback: build_feedback(breakdown.overall),
        record,
    }
}

/// `m:ss`, minutes unpadded.
pub fn format_clock(total_secs: u64) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
