use core::fmt::{self, Write};

use heapless::String;

/// Longest text [`Time::format`] can produce, `255:255:255`.
pub const FORMATTED_CAPACITY: usize = 11;

/// A wall-clock time of day.
///
/// The fields are stored verbatim and never validated or wrapped, except by
/// [`Time::from_total_minutes`]. A value with all three fields set to
/// [`Time::UNSET_FIELD`] means "no time recorded"; use [`Time::is_set`] before
/// trusting the fields.
///
/// Equality compares hour, minutes and seconds field by field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Time {
    hour: u8,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// Field value used by the unset sentinel.
    pub const UNSET_FIELD: u8 = 99;

    /// The unset sentinel, `99:99:99`.
    pub const fn empty() -> Self {
        Self {
            hour: Self::UNSET_FIELD,
            minutes: Self::UNSET_FIELD,
            seconds: Self::UNSET_FIELD,
        }
    }

    /// Stores `hour` and `minutes` as given, with seconds at zero.
    pub const fn from_hour_minute(hour: u8, minutes: u8) -> Self {
        Self {
            hour,
            minutes,
            seconds: 0,
        }
    }

    /// Splits a count of minutes into hours and minutes, with seconds at zero.
    ///
    /// There is no upper bound: 1500 minutes is 25:00. Hours past `u8::MAX`
    /// keep only their low byte, so only totals up to `255 * 60 + 59` round
    /// trip through [`Time::to_total_minutes`].
    pub const fn from_total_minutes(total: u16) -> Self {
        Self {
            hour: (total / 60) as u8,
            minutes: (total % 60) as u8,
            seconds: 0,
        }
    }

    /// Resets the value to the unset sentinel.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Returns `false` only for the unset sentinel.
    pub const fn is_set(&self) -> bool {
        !(self.hour == Self::UNSET_FIELD
            && self.minutes == Self::UNSET_FIELD
            && self.seconds == Self::UNSET_FIELD)
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub fn set_hour(&mut self, hour: u8) {
        self.hour = hour;
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn set_minutes(&mut self, minutes: u8) {
        self.minutes = minutes;
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn set_seconds(&mut self, seconds: u8) {
        self.seconds = seconds;
    }

    /// `hour * 60 + minutes`. Seconds are ignored.
    pub const fn to_total_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minutes as u16
    }

    /// `to_total_minutes() * 60 + seconds`.
    pub const fn to_total_seconds(&self) -> u32 {
        self.to_total_minutes() as u32 * 60 + self.seconds as u32
    }

    /// Renders `HH:MM`, or `HH:MM:SS` when `include_seconds` is set.
    ///
    /// Single digit fields get a leading zero, wider ones are printed as is,
    /// so the sentinel comes out as `99:99` and `255` stays `255`.
    pub fn format(&self, include_seconds: bool) -> String<FORMATTED_CAPACITY> {
        let mut text = String::new();
        // Cannot overflow, FORMATTED_CAPACITY covers three-digit fields.
        let _ = if include_seconds {
            write!(text, "{self:#}")
        } else {
            write!(text, "{self}")
        };
        text
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::empty()
    }
}

/// `HH:MM`, or `HH:MM:SS` with the alternate flag (`{:#}`).
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minutes)?;
        if f.alternate() {
            write!(f, ":{:02}", self.seconds)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Time {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        defmt::write!(
            fmt,
            "{=u8:02}:{=u8:02}:{=u8:02}",
            self.hour,
            self.minutes,
            self.seconds
        )
    }
}
