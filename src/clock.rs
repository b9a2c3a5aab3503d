//! Clock arithmetic for the stopwatch face.
//!
//! Breaks an elapsed millisecond count into the four digit groups shown on
//! the face: hours, minutes, seconds and hundredths of a second. Everything
//! here is pure integer arithmetic.
//!
//! ```rust
//! use bubbletea_stopwatch::clock::Reading;
//!
//! let reading = Reading::from_millis(3_661_230);
//! assert_eq!(reading.hours, 1);
//! assert_eq!(reading.minutes, 1);
//! assert_eq!(reading.seconds, 1);
//! assert_eq!(reading.hundredths, 23);
//! assert_eq!(reading.to_string(), "01:01:01:23");
//! assert_eq!(reading.format(false), "01:01:23");
//! ```

use std::fmt;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: u64 = 3_600_000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: u64 = 60_000;
/// Milliseconds in one second.
pub const MS_PER_SECOND: u64 = 1_000;
/// Milliseconds in one hundredth of a second.
pub const MS_PER_HUNDREDTH: u64 = 10;

/// Which field of the clock a digit group shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Whole hours, never wrapped.
    Hours,
    /// Minutes within the hour.
    Minutes,
    /// Seconds within the minute.
    Seconds,
    /// Hundredths within the second.
    Hundredths,
}

/// A zero-padded field of the clock, rendered digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroup {
    /// The field this group displays.
    pub unit: Unit,
    /// The raw field value.
    pub value: u64,
}

impl DigitGroup {
    /// Zero-padded text of the group, at least two characters wide.
    pub fn text(&self) -> String {
        format!("{:02}", self.value)
    }

    /// The padded text split into individual digit characters.
    pub fn digits(&self) -> Vec<char> {
        self.text().chars().collect()
    }
}

/// Elapsed time decomposed into clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reading {
    /// Whole hours.
    pub hours: u64,
    /// Minutes, `0..60`.
    pub minutes: u64,
    /// Seconds, `0..60`.
    pub seconds: u64,
    /// Hundredths of a second, `0..100`.
    pub hundredths: u64,
}

impl Reading {
    /// Decomposes `elapsed_ms` into hours, minutes, seconds and hundredths.
    ///
    /// The sub-hundredth remainder (0-9 ms) is dropped.
    pub fn from_millis(elapsed_ms: u64) -> Self {
        Self {
            hours: elapsed_ms / MS_PER_HOUR,
            minutes: (elapsed_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (elapsed_ms % MS_PER_MINUTE) / MS_PER_SECOND,
            hundredths: (elapsed_ms % MS_PER_SECOND) / MS_PER_HUNDREDTH,
        }
    }

    /// Milliseconds represented by this reading, i.e. `elapsed_ms` rounded
    /// down to the hundredth.
    pub fn as_millis(&self) -> u64 {
        self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
            + self.hundredths * MS_PER_HUNDREDTH
    }

    /// The digit groups in display order. The hours group is only included
    /// when `show_hours` is set.
    pub fn groups(&self, show_hours: bool) -> Vec<DigitGroup> {
        let mut groups = Vec::with_capacity(4);
        if show_hours {
            groups.push(DigitGroup {
                unit: Unit::Hours,
                value: self.hours,
            });
        }
        groups.push(DigitGroup {
            unit: Unit::Minutes,
            value: self.minutes,
        });
        groups.push(DigitGroup {
            unit: Unit::Seconds,
            value: self.seconds,
        });
        groups.push(DigitGroup {
            unit: Unit::Hundredths,
            value: self.hundredths,
        });
        groups
    }

    /// Colon separated text of the visible groups: `mm:ss:cc`, or
    /// `hh:mm:ss:cc` when `show_hours` is set.
    pub fn format(&self, show_hours: bool) -> String {
        self.groups(show_hours)
            .iter()
            .map(DigitGroup::text)
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl fmt::Display for Reading {
    /// Always the full `hh:mm:ss:cc` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.hundredths
        )
    }
}
