use crate::time::Time;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Running wall clock driven by a 1 Hz tick and a "plus one minute" button.
///
/// Starts out unset unless given a time. The day wrap happens here, the
/// [`Time`] it holds never wraps on its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    time: Time,
}

impl Clock {
    pub const fn new(time: Time) -> Self {
        Self { time }
    }

    pub const fn time(&self) -> Time {
        self.time
    }

    pub fn set_time(&mut self, time: Time) {
        self.time = time;
    }

    /// Advances one second, rolling over into the next minute after second 59.
    /// An unset clock does not run.
    pub fn tick(&mut self) {
        if !self.time.is_set() {
            return;
        }
        let secs = self.time.seconds();
        if secs < 59 {
            self.time.set_seconds(secs + 1);
        } else {
            self.advance_minute();
        }
    }

    /// Advances one minute, keeping the seconds. An unset clock starts at
    /// midnight.
    pub fn add_minute(&mut self) {
        if !self.time.is_set() {
            self.time = Time::from_hour_minute(0, 0);
        }
        let secs = self.time.seconds();
        self.advance_minute();
        self.time.set_seconds(secs);
    }

    fn advance_minute(&mut self) {
        let total = (self.time.to_total_minutes() + 1) % MINUTES_PER_DAY;
        self.time = Time::from_total_minutes(total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(hour: u8, minutes: u8, seconds: u8) -> Time {
        let mut time = Time::from_hour_minute(hour, minutes);
        time.set_seconds(seconds);
        time
    }

    #[test]
    fn tick_counts_seconds() {
        let mut clock = Clock::new(hms(12, 34, 56));
        clock.tick();
        assert_eq!(clock.time(), hms(12, 34, 57));
    }

    #[test]
    fn tick_rolls_minute_and_hour() {
        let mut clock = Clock::new(hms(12, 59, 59));
        clock.tick();
        assert_eq!(clock.time(), hms(13, 0, 0));
    }

    #[test]
    fn tick_wraps_at_midnight() {
        let mut clock = Clock::new(hms(23, 59, 59));
        clock.tick();
        assert_eq!(clock.time(), hms(0, 0, 0));
    }

    #[test]
    fn out_of_range_seconds_roll_over() {
        let mut clock = Clock::new(hms(1, 2, 75));
        clock.tick();
        assert_eq!(clock.time(), hms(1, 3, 0));
    }

    #[test]
    fn unset_clock_does_not_run() {
        let mut clock = Clock::default();
        for _ in 0..120 {
            clock.tick();
        }
        assert!(!clock.time().is_set());
        assert_eq!(clock.time().format(true).as_str(), "99:99:99");
    }

    #[test]
    fn add_minute_keeps_seconds() {
        let mut clock = Clock::new(hms(23, 59, 30));
        clock.add_minute();
        assert_eq!(clock.time(), hms(0, 0, 30));
    }

    #[test]
    fn add_minute_starts_unset_clock_at_midnight() {
        let mut clock = Clock::new(Time::empty());
        clock.add_minute();
        assert_eq!(clock.time(), hms(0, 1, 0));
        clock.tick();
        assert_eq!(clock.time(), hms(0, 1, 1));
    }

    #[test]
    fn hours_past_the_day_are_folded_back() {
        let mut clock = Clock::new(Time::from_total_minutes(1500));
        clock.add_minute();
        assert_eq!(clock.time(), hms(1, 1, 0));
    }
}
