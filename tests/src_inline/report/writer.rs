use super::*;
use crate::input::load_history;
use crate::model::history::demo_history;
use crate::model::rules::ScoringRules;
use crate::model::transcript::{Speaker, Turn};
use crate::pipeline::scorer::score_transcript;
use crate::report::build_summary;
use chrono::{TimeZone, Utc};

fn sample_transcript() -> Transcript {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let mut t = Transcript::new();
    t.push(Turn::new(Speaker::Prompter, "What problem are you solving?", at));
    t.push(Turn::new(Speaker::Respondent, "Clinics lose revenue to no-shows.", at));
    t
}

#[test]
fn test_write_session_reports_creates_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("run1");
    let rules = ScoringRules::default_v1();
    let t = sample_transcript();
    let breakdown = score_transcript(&t, &rules);
    let summary = build_summary(&t, &breakdown, &rules, None, None);

    let written = write_session_reports(&out, &t, &summary).unwrap();
    assert!(written.transcript.exists());
    assert!(written.results.exists());
    assert!(written.report.exists());

    let results: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&written.results).unwrap()).unwrap();
    assert_eq!(results["breakdown"]["overall"], 62);

    let roundtrip: Transcript =
        serde_json::from_str(&std::fs::read_to_string(&written.transcript).unwrap()).unwrap();
    assert_eq!(roundtrip, t);

    let report = std::fs::read_to_string(&written.report).unwrap();
    assert!(report.contains("Score: 62/100"));
}

#[test]
fn test_append_history_creates_and_extends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");
    let mut records = demo_history();

    assert_eq!(append_history(&path, records.remove(0)).unwrap(), 1);
    assert_eq!(append_history(&path, records.remove(0)).unwrap(), 2);

    let loaded = load_history(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].startup, "TechFlow");
    assert_eq!(loaded[1].startup, "EcoStart");
}

#[test]
fn test_append_history_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    let err = append_history(&path, demo_history().remove(0)).unwrap_err();
    assert!(matches!(err, ReportError::Input(InputError::Parse(_))));
}
