use std::time::{Duration, Instant};

/// Interval between animation ticks (about 60 Hz).
pub const TICK_PERIOD: Duration = Duration::from_millis(16);

/// Self re-arming tick deadline.
///
/// The first tick is due as soon as the schedule starts. After each tick the
/// caller re-arms it one period past the time the tick ran.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    period: Duration,
    next: Instant,
}

impl TickSchedule {
    pub fn start(now: Instant) -> Self {
        Self::with_period(now, TICK_PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self { period, next: now }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the next tick one period after `now` and return its deadline.
    pub fn rearm(&mut self, now: Instant) -> Instant {
        self.next = now + self.period;
        self.next
    }
}
