//! Time-of-day and calendar date value types.
//!
//! Times of day are carried in **HHmm encoding** (`1430` = 14:30), which is
//! what the sunrise/sunset table stores.  HHmm is monotonic in real time for
//! valid hour/minute pairs, so ordering comparisons work directly on the
//! encoded value.  Arithmetic does not: offsets are applied in
//! minutes-since-midnight via [`to_minutes`] / [`to_hhmm`] and converted back.
//!
//! Date validation has no leap-year rule: February always
//! accepts day 29.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// HHmm → minutes since midnight.
pub const fn to_minutes(hhmm: i32) -> i32 {
    (hhmm / 100) * 60 + hhmm % 100
}

/// Minutes since midnight → HHmm.
pub const fn to_hhmm(minutes: i32) -> i32 {
    (minutes / 60) * 100 + minutes % 60
}

/// `true` if `(month, day)` names a day that exists in some year.
///
/// 30-day months reject day 31; February rejects anything past 29 with no
/// leap-year check.
pub const fn is_valid_date(month: u8, day: u8) -> bool {
    !(month < 1
        || month > 12
        || day < 1
        || day > 31
        || (day > 30 && matches!(month, 4 | 6 | 9 | 11))
        || (day > 29 && month == 2))
}

/// `true` for a valid 24-hour wall-clock time.
pub const fn is_valid_time(hour: u8, minute: u8, second: u8) -> bool {
    hour <= 23 && minute <= 59 && second <= 59
}

// ───────────────────────────────────────────────────────────────
// ClockTime
// ───────────────────────────────────────────────────────────────

/// A time of day in HHmm encoding.  Always holds hour ≤ 23, minute ≤ 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: Self = Self(0);

    /// Build from hour and minute.  `None` if out of range.
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(Self(hour as u16 * 100 + minute as u16))
        } else {
            None
        }
    }

    /// Build from an HHmm value.  `None` if the hour or minute part is out of range.
    pub const fn from_hhmm(hhmm: u16) -> Option<Self> {
        if hhmm / 100 <= 23 && hhmm % 100 <= 59 {
            Some(Self(hhmm))
        } else {
            None
        }
    }

    /// Build from minutes since midnight, pinned to `[00:00, 23:59]`.
    pub fn from_minutes_clamped(minutes: i32) -> Self {
        let m = minutes.clamp(0, MINUTES_PER_DAY - 1);
        Self(to_hhmm(m) as u16)
    }

    /// The time-of-day part of a wall-clock timestamp (seconds dropped).
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self(timestamp.hour() as u16 * 100 + timestamp.minute() as u16)
    }

    pub const fn hhmm(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u8 {
        (self.0 / 100) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.0 % 100) as u8
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> i32 {
        to_minutes(self.0 as i32)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ───────────────────────────────────────────────────────────────
// CalendarDate
// ───────────────────────────────────────────────────────────────

/// A calendar date that passed [`is_valid_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// `None` unless `(month, day)` passes [`is_valid_date`].
    pub const fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if is_valid_date(month, day) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    pub const fn year(self) -> u16 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    /// Convert to a real calendar date.  `None` for February 29th of a
    /// non-leap year, which [`is_valid_date`] lets through.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(0, 9999) as u16,
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
