use std::time::Duration;

use crate::pipeline::session::{PitchSession, SessionError, SessionEvent, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Jump the clock straight to the next due timer.
    Virtual,
    /// Sleep until the next due timer.
    Realtime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPlan {
    pub answers: Vec<String>,
    /// Request an early end once this many answers were submitted.
    pub end_after: Option<usize>,
}

/// Plays `plan` against `session` until it is scored. Returns the session
/// clock at the end.
///
/// On error the session is torn down so no timer outlives the run.
pub fn drive_scripted(
    session: &mut PitchSession,
    plan: &ScriptPlan,
    pacing: Pacing,
) -> Result<Duration, SessionError> {
    let result = drive(session, plan, pacing);
    if result.is_err() {
        session.teardown();
    }
    result
}

fn drive(
    session: &mut PitchSession,
    plan: &ScriptPlan,
    pacing: Pacing,
) -> Result<Duration, SessionError> {
    let mut now = Duration::ZERO;
    session.start(now)?;

    let limit = plan.end_after.unwrap_or(usize::MAX);
    let mut answers = plan.answers.iter();
    let mut answered = 0usize;

    loop {
        match session.state() {
            SessionState::InProgress { .. } => {
                if session.awaiting_prompt() {
                    now = step(session, now, pacing);
                    continue;
                }
                if answered >= limit {
                    session.request_end(now)?;
                    continue;
                }
                match answers.next() {
                    Some(answer) => {
                        session.submit(answer, now)?;
                        answered += 1;
                    }
                    None => session.request_end(now)?,
                }
            }
            SessionState::Ended { .. } => {
                if session.breakdown().is_some() || session.next_due().is_none() {
                    break;
                }
                now = step(session, now, pacing);
            }
            SessionState::NotStarted => break,
        }
    }
    Ok(now)
}

fn step(session: &mut PitchSession, now: Duration, pacing: Pacing) -> Duration {
    let Some(due) = session.next_due() else {
        return now;
    };
    let due = due.max(now);
    if pacing == Pacing::Realtime && due > now {
        std::thread::sleep(due - now);
    }
    for event in session.advance(due) {
        match event {
            SessionEvent::PromptDelivered { turn_index, text } => {
                tracing::debug!(turn_index, prompt = %text, "prompt delivered");
            }
            SessionEvent::Scored(breakdown) => {
                tracing::debug!(overall = breakdown.overall, "analysis finished");
            }
        }
    }
    due
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/driver.rs"]
mod tests;
