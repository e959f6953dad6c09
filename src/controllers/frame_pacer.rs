use std::time::{Duration, Instant};

/// Advisory frame deadlines at a fixed period. Late frames do not try to
/// catch up.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    period: Option<Duration>,
    next: Option<Instant>,
}

impl FramePacer {
    /// `None` disables pacing.
    #[must_use]
    pub fn new(period: Option<Duration>) -> Self {
        Self { period, next: None }
    }

    /// Records a frame starting at `now` and returns when the next one is due.
    pub fn schedule(&mut self, now: Instant) -> Option<Instant> {
        let period = self.period?;
        let due = match self.next {
            Some(next) if next > now => next + period,
            _ => now + period,
        };
        self.next = Some(due);

        Some(due)
    }

    /// Whether a frame may start at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }
}
