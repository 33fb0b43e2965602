use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Completed => "Completed",
            SessionStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub date: String,
    pub time: String,
    pub startup: String,
    pub judge_type: String,
    pub duration: String,
    pub score: u32,
    pub status: SessionStatus,
}

/// `None` or `"all"` disables the corresponding criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub startup: Option<String>,
    pub judge_type: Option<String>,
}

impl HistoryFilter {
    pub fn matches(&self, record: &SessionRecord) -> bool {
        criterion_matches(self.startup.as_deref(), &record.startup)
            && criterion_matches(self.judge_type.as_deref(), &record.judge_type)
    }

    pub fn apply<'a>(&self, records: &'a [SessionRecord]) -> Vec<&'a SessionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn criterion_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some("all") => true,
        Some(value) => value == actual,
    }
}

fn mock_record(
    id: &str,
    date: &str,
    time: &str,
    startup: &str,
    judge_type: &str,
    duration: &str,
    score: u32,
) -> SessionRecord {
    SessionRecord {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        startup: startup.to_string(),
        judge_type: judge_type.to_string(),
        duration: duration.to_string(),
        score,
        status: SessionStatus::Completed,
    }
}

/// Sample history used when no history file is supplied.
pub fn demo_history() -> Vec<SessionRecord> {
    vec![
        mock_record("1", "2025-01-15", "14:30", "TechFlow", "Venture Capitalist", "12:45", 85),
        mock_record("2", "2025-01-14", "10:15", "EcoStart", "Angel Investor", "10:20", 72),
        mock_record("3", "2025-01-12", "16:45", "FinTech Pro", "Tech Investor", "15:10", 89),
        mock_record("4", "2025-01-10", "11:00", "TechFlow", "Industry Expert", "11:30", 78),
        mock_record("5", "2025-01-08", "09:30", "EcoStart", "Venture Capitalist", "13:15", 68),
    ]
}
