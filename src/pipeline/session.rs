use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

use crate::model::history::{SessionRecord, SessionStatus};
use crate::model::limits::{LatencyProfile, SessionLimits};
use crate::model::rules::ScoringRules;
use crate::model::score::ScoreBreakdown;
use crate::model::transcript::{Speaker, Transcript, Turn};
use crate::personas::{PersonaCatalog, PersonaProfile};
use crate::pipeline::scheduler::{PendingAction, Scheduler, TimerId};
use crate::pipeline::scorer::score_transcript;
use crate::pipeline::sequencer::prompt_for_turn;
use crate::report::format_clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetup {
    pub startup: String,
    pub persona_id: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub limits: SessionLimits,
    pub latency: LatencyProfile,
    pub rules: ScoringRules,
    pub seed: u64,
    pub started_at: DateTime<Utc>,
}

impl SessionConfig {
    pub fn default_v1(started_at: DateTime<Utc>) -> Self {
        Self {
            limits: SessionLimits::default_v1(),
            latency: LatencyProfile::default_v1(),
            rules: ScoringRules::default_v1(),
            seed: 0,
            started_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    TurnLimit,
    Requested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { turn_index: usize },
    Ended { reason: EndReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("please select a startup to pitch")]
    MissingStartup,
    #[error("please select a judge persona")]
    MissingPersona,
    #[error("session has already started")]
    AlreadyStarted,
    #[error("session is not in progress")]
    NotInProgress,
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("the judge is still preparing the next question")]
    AwaitingPrompt,
    #[error(
        "please answer at least {required} questions before ending the session (answered {answered})"
    )]
    TooFewAnswers { answered: usize, required: usize },
    #[error("session has been torn down")]
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PromptDelivered { turn_index: usize, text: String },
    Scored(ScoreBreakdown),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub question: usize,
    pub total: usize,
}

/// One pitch session: transcript, state machine and pending timers.
///
/// Every timer belongs to the session and is cancelled by [`PitchSession::teardown`],
/// after which nothing can mutate the transcript.
#[derive(Debug)]
pub struct PitchSession {
    startup: String,
    persona: PersonaProfile,
    limits: SessionLimits,
    latency: LatencyProfile,
    rules: ScoringRules,
    started_at: DateTime<Utc>,
    state: SessionState,
    transcript: Transcript,
    scheduler: Scheduler,
    prompt_timer: Option<TimerId>,
    rng: StdRng,
    ended_at: Option<Duration>,
    breakdown: Option<ScoreBreakdown>,
    torn_down: bool,
}

impl PitchSession {
    pub fn create(
        setup: SessionSetup,
        catalog: &PersonaCatalog,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let startup = setup.startup.trim();
        if startup.is_empty() {
            return Err(SessionError::MissingStartup);
        }
        let persona_id = setup.persona_id.trim();
        if persona_id.is_empty() {
            return Err(SessionError::MissingPersona);
        }
        let persona = catalog.resolve(persona_id).clone();
        tracing::info!(startup, persona = %persona.id, "session created");

        Ok(Self {
            startup: startup.to_string(),
            persona,
            limits: config.limits,
            latency: config.latency,
            rules: config.rules,
            started_at: config.started_at,
            state: SessionState::NotStarted,
            transcript: Transcript::new(),
            scheduler: Scheduler::new(),
            prompt_timer: None,
            rng: StdRng::seed_from_u64(config.seed),
            ended_at: None,
            breakdown: None,
            torn_down: false,
        })
    }

    pub fn startup(&self) -> &str {
        &self.startup
    }

    pub fn persona(&self) -> &PersonaProfile {
        &self.persona
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn awaiting_prompt(&self) -> bool {
        self.scheduler
            .has_pending(|a| matches!(a, PendingAction::DeliverPrompt { .. }))
    }

    pub fn next_due(&self) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        self.scheduler.next_due()
    }

    pub fn start(&mut self, now: Duration) -> Result<(), SessionError> {
        self.ensure_live()?;
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.state = SessionState::InProgress { turn_index: 0 };
        self.prompt_timer = Some(self.scheduler.schedule(
            now,
            self.latency.greeting,
            PendingAction::DeliverPrompt { turn_index: 0 },
        ));
        tracing::debug!(persona = %self.persona.id, "session started");
        Ok(())
    }

    /// Appends a respondent answer and schedules whatever follows it.
    pub fn submit(&mut self, text: &str, now: Duration) -> Result<SessionState, SessionError> {
        self.ensure_live()?;
        let SessionState::InProgress { turn_index } = self.state else {
            return Err(SessionError::NotInProgress);
        };
        if text.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        if self.awaiting_prompt() {
            return Err(SessionError::AwaitingPrompt);
        }

        let stamp = self.timestamp(now);
        self.transcript
            .push(Turn::new(Speaker::Respondent, text, stamp));

        let turn_index = turn_index + 1;
        let reply = self.latency.reply_delay(&mut self.rng);
        if turn_index >= self.limits.max_turns {
            self.finish(EndReason::TurnLimit, now, reply + self.latency.analysis);
        } else {
            self.state = SessionState::InProgress { turn_index };
            self.prompt_timer = Some(self.scheduler.schedule(
                now,
                reply,
                PendingAction::DeliverPrompt { turn_index },
            ));
            tracing::debug!(turn_index, delay_ms = reply.as_millis() as u64, "answer recorded");
        }
        Ok(self.state)
    }

    /// Ends the session early. Rejected, with state unchanged, until enough
    /// answers exist.
    pub fn request_end(&mut self, now: Duration) -> Result<(), SessionError> {
        self.ensure_live()?;
        if !matches!(self.state, SessionState::InProgress { .. }) {
            return Err(SessionError::NotInProgress);
        }
        let answered = self.transcript.respondent_count();
        let required = self.limits.min_answers_to_end;
        if answered < required {
            tracing::warn!(answered, required, "early end rejected");
            return Err(SessionError::TooFewAnswers { answered, required });
        }
        if let Some(id) = self.prompt_timer.take() {
            if self.scheduler.cancel(id) {
                tracing::debug!("pending prompt cancelled");
            }
        }
        self.finish(EndReason::Requested, now, self.latency.analysis);
        Ok(())
    }

    /// Fires every timer due at or before `now`.
    pub fn advance(&mut self, now: Duration) -> Vec<SessionEvent> {
        if self.torn_down {
            return Vec::new();
        }
        let mut events = Vec::new();
        for event in self.scheduler.drain_due(now) {
            match event.action {
                PendingAction::DeliverPrompt { turn_index } => {
                    if self.prompt_timer == Some(event.id) {
                        self.prompt_timer = None;
                    }
                    let text = prompt_for_turn(&self.persona, &self.startup, turn_index);
                    let stamp = self.timestamp(event.due);
                    self.transcript
                        .push(Turn::new(Speaker::Prompter, text.clone(), stamp));
                    events.push(SessionEvent::PromptDelivered { turn_index, text });
                }
                PendingAction::Analyze => {
                    let breakdown = score_transcript(&self.transcript, &self.rules);
                    tracing::info!(overall = breakdown.overall, "session scored");
                    self.breakdown = Some(breakdown.clone());
                    events.push(SessionEvent::Scored(breakdown));
                }
            }
        }
        events
    }

    /// Cancels all pending timers. Returns how many were cancelled.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        self.prompt_timer = None;
        self.torn_down = true;
        tracing::info!(cancelled, "session torn down");
        cancelled
    }

    pub fn progress(&self) -> Progress {
        let delivered = self
            .transcript
            .turns()
            .iter()
            .filter(|t| t.speaker == Speaker::Prompter)
            .count();
        Progress {
            question: delivered.min(self.limits.max_turns),
            total: self.limits.max_turns,
        }
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        self.ended_at.unwrap_or(now)
    }

    pub fn to_record(&self, id: &str, now: Duration) -> SessionRecord {
        let status = if self.breakdown.is_some() {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        };
        SessionRecord {
            id: id.to_string(),
            date: self.started_at.format("%Y-%m-%d").to_string(),
            time: self.started_at.format("%H:%M").to_string(),
            startup: self.startup.clone(),
            judge_type: self.persona.name.clone(),
            duration: format_clock(self.elapsed(now).as_secs()),
            score: self.breakdown.as_ref().map(|b| b.overall).unwrap_or(0),
            status,
        }
    }

    fn finish(&mut self, reason: EndReason, now: Duration, delay: Duration) {
        self.state = SessionState::Ended { reason };
        self.ended_at = Some(now);
        self.scheduler.schedule(now, delay, PendingAction::Analyze);
        tracing::info!(
            ?reason,
            answers = self.transcript.respondent_count(),
            "session ended; analysis scheduled"
        );
    }

    fn ensure_live(&self) -> Result<(), SessionError> {
        if self.torn_down {
            Err(SessionError::TornDown)
        } else {
            Ok(())
        }
    }

    fn timestamp(&self, offset: Duration) -> DateTime<Utc> {
        self.started_at + TimeDelta::from_std(offset).unwrap_or(TimeDelta::zero())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/session.rs"]
mod tests;
