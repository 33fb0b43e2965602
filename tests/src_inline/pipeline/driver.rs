use super::*;
use crate::model::limits::LatencyProfile;
use crate::personas::PersonaCatalog;
use crate::pipeline::session::{EndReason, SessionConfig, SessionSetup};
use chrono::{TimeZone, Utc};

fn session(latency: LatencyProfile) -> PitchSession {
    let mut config =
        SessionConfig::default_v1(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
    config.latency = latency;
    config.seed = 42;
    PitchSession::create(
        SessionSetup {
            startup: "EcoStart".to_string(),
            persona_id: "angel".to_string(),
        },
        &PersonaCatalog::builtin(),
        config,
    )
    .unwrap()
}

fn plan(n: usize, end_after: Option<usize>) -> ScriptPlan {
    ScriptPlan {
        answers: (0..n).map(|i| format!("answer number {i}")).collect(),
        end_after,
    }
}

#[test]
fn test_full_script_runs_to_turn_limit() {
    let mut s = session(LatencyProfile::instant());
    drive_scripted(&mut s, &plan(8, None), Pacing::Virtual).unwrap();
    assert_eq!(
        s.state(),
        SessionState::Ended {
            reason: EndReason::TurnLimit
        }
    );
    assert!(s.breakdown().is_some());
    assert_eq!(s.transcript().respondent_count(), 8);
    assert_eq!(s.transcript().len(), 16);
}

#[test]
fn test_extra_answers_are_ignored() {
    let mut s = session(LatencyProfile::instant());
    drive_scripted(&mut s, &plan(12, None), Pacing::Virtual).unwrap();
    assert_eq!(s.transcript().respondent_count(), 8);
}

#[test]
fn test_short_script_ends_early() {
    let mut s = session(LatencyProfile::instant());
    drive_scripted(&mut s, &plan(3, None), Pacing::Virtual).unwrap();
    assert_eq!(
        s.state(),
        SessionState::Ended {
            reason: EndReason::Requested
        }
    );
    assert_eq!(s.transcript().respondent_count(), 3);
    assert!(s.breakdown().is_some());
}

#[test]
fn test_end_after_limits_answers() {
    let mut s = session(LatencyProfile::instant());
    drive_scripted(&mut s, &plan(6, Some(2)), Pacing::Virtual).unwrap();
    assert_eq!(s.transcript().respondent_count(), 2);
    assert_eq!(s.breakdown().map(|b| b.overall), Some(60));
}

#[test]
fn test_single_answer_is_rejected_and_torn_down() {
    let mut s = session(LatencyProfile::instant());
    let err = drive_scripted(&mut s, &plan(1, None), Pacing::Virtual).unwrap_err();
    assert_eq!(
        err,
        SessionError::TooFewAnswers {
            answered: 1,
            required: 2
        }
    );
    assert!(s.breakdown().is_none());
    assert_eq!(s.next_due(), None);
    assert_eq!(s.submit("late", Duration::ZERO), Err(SessionError::TornDown));
}

#[test]
fn test_virtual_clock_accumulates_latency() {
    let mut s = session(LatencyProfile::default_v1());
    let end = drive_scripted(&mut s, &plan(8, None), Pacing::Virtual).unwrap();
    // greeting + 7 replies + final reply + analysis
    let min = Duration::from_millis(1000 + 8 * 2000 + 3000);
    let max = Duration::from_millis(1000 + 8 * 4000 + 3000);
    assert!(end >= min && end <= max, "end {end:?}");
}

#[test]
fn test_same_seed_same_clock() {
    let mut a = session(LatencyProfile::default_v1());
    let mut b = session(LatencyProfile::default_v1());
    let ea = drive_scripted(&mut a, &plan(8, None), Pacing::Virtual).unwrap();
    let eb = drive_scripted(&mut b, &plan(8, None), Pacing::Virtual).unwrap();
    assert_eq!(ea, eb);
    assert_eq!(a.transcript(), b.transcript());
}
