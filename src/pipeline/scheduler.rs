use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeliverPrompt { turn_index: usize },
    Analyze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub id: TimerId,
    pub due: Duration,
    pub action: PendingAction,
}

/// Cancellable timers on a virtual clock measured from session start.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, action: PendingAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledEvent {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        before != self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn has_pending<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&PendingAction) -> bool,
    {
        self.pending.iter().any(|e| pred(&e.action))
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|e| e.due).min()
    }

    /// Removes and returns every event due at or before `now`, earliest first.
    /// Ties keep scheduling order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        let mut i = 0usize;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.due, e.id));
        due
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scheduler.rs"]
mod tests;
