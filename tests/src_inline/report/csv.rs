use super::*;
use crate::model::history::{HistoryFilter, SessionStatus, demo_history};

#[test]
fn test_header_and_row_order() {
    let records = demo_history();
    let csv = render_sessions_csv(&records[..1]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Date,Time,Startup,Judge Type,Duration,Score,Status");
    assert_eq!(
        lines[1],
        "2025-01-15,14:30,TechFlow,Venture Capitalist,12:45,85,Completed"
    );
}

#[test]
fn test_line_count_matches_filtered_sessions() {
    let records = demo_history();
    let cases = [
        (HistoryFilter::default(), 5),
        (
            HistoryFilter {
                startup: Some("TechFlow".to_string()),
                judge_type: None,
            },
            2,
        ),
        (
            HistoryFilter {
                startup: Some("all".to_string()),
                judge_type: Some("Venture Capitalist".to_string()),
            },
            2,
        ),
        (
            HistoryFilter {
                startup: Some("EcoStart".to_string()),
                judge_type: Some("Angel Investor".to_string()),
            },
            1,
        ),
        (
            HistoryFilter {
                startup: Some("Nobody".to_string()),
                judge_type: None,
            },
            0,
        ),
    ];
    for (filter, expected) in cases {
        let selected = filter.apply(&records);
        assert_eq!(selected.len(), expected);
        let csv = render_sessions_csv(selected.iter().copied());
        assert_eq!(csv.split('\n').count(), expected + 1);
    }
}

#[test]
fn test_fields_are_escaped() {
    let mut record = demo_history().remove(0);
    record.startup = "Acme, Inc.".to_string();
    record.judge_type = "The \"Shark\"\nInvestor".to_string();
    record.status = SessionStatus::InProgress;
    let csv = render_sessions_csv([&record]);
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "2025-01-15,14:30,\"Acme, Inc.\",\"The \"\"Shark\"\" Investor\",12:45,85,In Progress"
    );
}
