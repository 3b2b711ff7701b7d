use std::time::{Duration, Instant};

/// Repeating deadline schedule.
///
/// The runtime sleeps until [`next_deadline`](Self::next_deadline) and then
/// asks [`poll`](Self::poll) how many whole intervals have passed. Deadlines
/// advance on a fixed grid, so a late wake-up does not shift later ticks.
///
/// After a long stall (suspend, debugger) the count is clamped to
/// `max_catch_up` and the grid restarts from the current instant.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    next: Instant,
    max_catch_up: u32,
}

impl TickSchedule {
    /// One hour of one-second ticks.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 3600;

    /// First deadline is one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self::with_max_catch_up(interval, now, Self::DEFAULT_MAX_CATCH_UP)
    }

    pub fn with_max_catch_up(interval: Duration, now: Instant, max_catch_up: u32) -> Self {
        // a zero interval would make every poll report an unbounded count
        let interval = interval.max(Duration::from_millis(1));
        Self { interval, next: now + interval, max_catch_up: max_catch_up.max(1) }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Restarts the grid at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }

    /// Number of deadlines passed at `now` (0 if none), advancing past them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now < self.next {
            return 0;
        }

        let late = now.duration_since(self.next);
        let elapsed = late.as_nanos() / self.interval.as_nanos() + 1;

        if elapsed > u128::from(self.max_catch_up) {
            log::warn!(
                "tick schedule stalled for {:?}; catching up {} of {elapsed} ticks",
                late,
                self.max_catch_up
            );
            self.reset(now);
            return self.max_catch_up;
        }

        // elapsed <= max_catch_up, so it fits in u32
        let elapsed = elapsed as u32;
        self.next += self.interval * elapsed;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn nothing_due_before_first_deadline() {
        let t0 = Instant::now();
        let mut s = TickSchedule::new(SEC, t0);
        assert_eq!(s.next_deadline(), t0 + SEC);
        assert_eq!(s.poll(t0 + Duration::from_millis(999)), 0);
    }

    #[test]
    fn one_tick_at_deadline() {
        let t0 = Instant::now();
        let mut s = TickSchedule::new(SEC, t0);
        assert_eq!(s.poll(t0 + SEC), 1);
        assert_eq!(s.next_deadline(), t0 + 2 * SEC);
    }

    #[test]
    fn late_wake_keeps_grid() {
        let t0 = Instant::now();
        let mut s = TickSchedule::new(SEC, t0);
        assert_eq!(s.poll(t0 + Duration::from_millis(1300)), 1);
        assert_eq!(s.next_deadline(), t0 + 2 * SEC);
    }

    #[test]
    fn several_missed_intervals_reported() {
        let t0 = Instant::now();
        let mut s = TickSchedule::new(SEC, t0);
        assert_eq!(s.poll(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(s.next_deadline(), t0 + 4 * SEC);
        assert_eq!(s.poll(t0 + Duration::from_millis(3600)), 0);
    }

    #[test]
    fn long_stall_is_clamped_and_resynced() {
        let t0 = Instant::now();
        let mut s = TickSchedule::with_max_catch_up(SEC, t0, 5);
        let now = t0 + 100 * SEC;
        assert_eq!(s.poll(now), 5);
        assert_eq!(s.next_deadline(), now + SEC);
    }

    #[test]
    fn zero_interval_is_bumped() {
        let t0 = Instant::now();
        let s = TickSchedule::new(Duration::ZERO, t0);
        assert_eq!(s.interval(), Duration::from_millis(1));
    }
}
