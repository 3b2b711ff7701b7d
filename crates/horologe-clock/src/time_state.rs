use std::fmt;

use chrono::Timelike;

const HOURS_PER_FACE: u8 = 12;
const MINUTES_PER_HOUR: u8 = 60;
const SECONDS_PER_MINUTE: u8 = 60;

/// Displayed clock time on a 12-hour face.
///
/// Invariant: `hour < 12`, `minute < 60`, `second < 60`. Fields are private so
/// the only ways to change a `TimeState` are [`advance`](Self::advance) and
/// [`set_fields`](Self::set_fields), both of which preserve the invariant.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeState {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Partial overwrite for [`TimeState::set_fields`].
///
/// `None` means "leave this field unchanged".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FieldUpdate {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

impl FieldUpdate {
    #[inline]
    pub const fn none() -> Self {
        Self { hour: None, minute: None, second: None }
    }

    #[inline]
    pub const fn hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    #[inline]
    pub const fn minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    #[inline]
    pub const fn second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.second.is_none()
    }
}

impl TimeState {
    /// Creates a state, reducing each field into its range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % HOURS_PER_FACE,
            minute: minute % MINUTES_PER_HOUR,
            second: second % SECONDS_PER_MINUTE,
        }
    }

    /// Reads hour/minute/second from any wall-clock value.
    ///
    /// 24-hour input folds onto the 12-hour face (13:05 shows as 1:05).
    pub fn from_wall_clock<T: Timelike>(t: &T) -> Self {
        Self::new(t.hour12().1 as u8, t.minute() as u8, t.second() as u8)
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Advances by one second, carrying into minute and hour.
    pub fn advance(&mut self) {
        self.second += 1;
        if self.second == SECONDS_PER_MINUTE {
            self.second = 0;
            self.minute += 1;
            if self.minute == MINUTES_PER_HOUR {
                self.minute = 0;
                self.hour = (self.hour + 1) % HOURS_PER_FACE;
            }
        }
    }

    /// Overwrites the fields present in `update`.
    ///
    /// Values outside a field's range are reduced modulo that range.
    pub fn set_fields(&mut self, update: FieldUpdate) {
        if let Some(h) = update.hour {
            self.hour = h % HOURS_PER_FACE;
        }
        if let Some(m) = update.minute {
            self.minute = m % MINUTES_PER_HOUR;
        }
        if let Some(s) = update.second {
            self.second = s % SECONDS_PER_MINUTE;
        }
    }

    /// Update that moves the minute forward by one, rolling into the hour.
    ///
    /// Seconds are untouched.
    pub fn next_minute(&self) -> FieldUpdate {
        if self.minute + 1 == MINUTES_PER_HOUR {
            FieldUpdate::none()
                .minute(0)
                .hour((self.hour + 1) % HOURS_PER_FACE)
        } else {
            FieldUpdate::none().minute(self.minute + 1)
        }
    }

    /// Update that moves the hour forward by one, wrapping 11 → 0.
    pub fn next_hour(&self) -> FieldUpdate {
        FieldUpdate::none().hour((self.hour + 1) % HOURS_PER_FACE)
    }
}

impl fmt::Display for TimeState {
    /// Formats as `H:MM:SS` with hour 0 shown as 12.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.hour == 0 { 12 } else { self.hour };
        write!(f, "{}:{:02}:{:02}", shown, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn t(h: u8, m: u8, s: u8) -> TimeState { TimeState::new(h, m, s) }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn advance_increments_second() {
        let mut s = t(1, 2, 3);
        s.advance();
        assert_eq!(s, t(1, 2, 4));
    }

    #[test]
    fn sixty_advances_equal_one_minute() {
        let mut s = t(4, 17, 0);
        for _ in 0..60 {
            s.advance();
        }
        assert_eq!(s, t(4, 18, 0));
    }

    #[test]
    fn full_hour_cycle_returns_to_start_hour_plus_one() {
        let mut s = t(5, 30, 45);
        for _ in 0..3600 {
            s.advance();
        }
        assert_eq!(s, t(6, 30, 45));
    }

    #[test]
    fn twelve_hours_of_advances_is_identity() {
        let start = t(9, 41, 7);
        let mut s = start;
        for _ in 0..(12 * 3600) {
            s.advance();
        }
        assert_eq!(s, start);
    }

    #[test]
    fn eleven_rolls_over_to_zero_never_twelve() {
        let mut s = t(11, 59, 59);
        s.advance();
        assert_eq!(s, t(0, 0, 0));
    }

    // ── set_fields ────────────────────────────────────────────────────────

    #[test]
    fn set_fields_only_touches_provided_fields() {
        let mut s = t(3, 20, 10);
        s.set_fields(FieldUpdate::none().minute(45));
        assert_eq!(s, t(3, 45, 10));
        s.set_fields(FieldUpdate::none().hour(8));
        assert_eq!(s, t(8, 45, 10));
    }

    #[test]
    fn set_fields_empty_is_noop() {
        let mut s = t(7, 7, 7);
        s.set_fields(FieldUpdate::none());
        assert_eq!(s, t(7, 7, 7));
        assert!(FieldUpdate::default().is_empty());
    }

    #[test]
    fn set_fields_reduces_out_of_range_values() {
        let mut s = t(0, 0, 0);
        s.set_fields(FieldUpdate::none().hour(12).minute(61).second(125));
        assert_eq!(s, t(0, 1, 5));
    }

    // ── next_minute / next_hour ───────────────────────────────────────────

    #[test]
    fn next_minute_rolls_into_hour() {
        let mut s = t(11, 59, 30);
        s.set_fields(s.next_minute());
        assert_eq!(s, t(0, 0, 30));
    }

    #[test]
    fn next_minute_plain() {
        let mut s = t(2, 10, 5);
        s.set_fields(s.next_minute());
        assert_eq!(s, t(2, 11, 5));
    }

    #[test]
    fn next_hour_wraps() {
        let mut s = t(11, 15, 0);
        s.set_fields(s.next_hour());
        assert_eq!(s, t(0, 15, 0));
    }

    // ── construction / display ────────────────────────────────────────────

    #[test]
    fn from_wall_clock_folds_afternoon() {
        let wall = NaiveTime::from_hms_opt(15, 4, 5).unwrap();
        assert_eq!(TimeState::from_wall_clock(&wall), t(3, 4, 5));
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(TimeState::from_wall_clock(&noon), t(0, 0, 0));
    }

    #[test]
    fn display_shows_twelve_for_zero_hour() {
        assert_eq!(t(0, 5, 9).to_string(), "12:05:09");
        assert_eq!(t(7, 30, 0).to_string(), "7:30:00");
    }
}
