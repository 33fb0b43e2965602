use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_turns: usize,
    pub min_answers_to_end: usize,
}

impl SessionLimits {
    pub fn default_v1() -> Self {
        Self {
            max_turns: 8,
            min_answers_to_end: 2,
        }
    }
}

/// Simulated think time before prompts and analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub greeting: Duration,
    pub reply_base: Duration,
    pub reply_jitter: Duration,
    pub analysis: Duration,
}

impl LatencyProfile {
    pub fn default_v1() -> Self {
        Self {
            greeting: Duration::from_millis(1000),
            reply_base: Duration::from_millis(2000),
            reply_jitter: Duration::from_millis(2000),
            analysis: Duration::from_millis(3000),
        }
    }

    pub fn instant() -> Self {
        Self {
            greeting: Duration::ZERO,
            reply_base: Duration::ZERO,
            reply_jitter: Duration::ZERO,
            analysis: Duration::ZERO,
        }
    }

    pub fn reply_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.reply_jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.reply_base;
        }
        self.reply_base + Duration::from_millis(rng.random_range(0..=jitter_ms))
    }
}
