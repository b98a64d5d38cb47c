//! Software real-time clock.
//!
//! Stands in for a battery-backed RTC on the host.  Wall-clock time is an
//! anchor (`NaiveDateTime` at a monotonic `Instant`) advanced by elapsed
//! monotonic time.  Until the first [`ClockPort::set_time`] the clock reports
//! itself unset, like an RTC whose oscillator stopped.
//!
//! The die temperature is whatever was last given to
//! [`set_temperature`](SoftRtc::set_temperature).

use std::time::Instant;

use chrono::{Local, NaiveDateTime, TimeDelta};
use log::{info, warn};

use crate::app::ports::{ClockError, ClockPort};

/// Temperature reported before any is set.
pub const DEFAULT_TEMPERATURE_C: i16 = 20;

#[derive(Debug)]
pub struct SoftRtc {
    anchor: Option<(NaiveDateTime, Instant)>,
    temperature_c: i16,
    /// Status code to fail the next RTC writes with.
    write_fault: Option<u8>,
}

impl Default for SoftRtc {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftRtc {
    /// A clock that has lost its time.
    pub fn new() -> Self {
        Self {
            anchor: None,
            temperature_c: DEFAULT_TEMPERATURE_C,
            write_fault: None,
        }
    }

    /// A clock already running on the host's local time.
    pub fn from_host_clock() -> Self {
        let mut rtc = Self::new();
        rtc.anchor = Some((Local::now().naive_local(), Instant::now()));
        info!("SoftRtc: seeded from host clock");
        rtc
    }

    pub fn set_temperature(&mut self, celsius: i16) {
        self.temperature_c = celsius;
    }

    /// Make every following write report `code`, or clear the fault with `None`.
    /// The software time is still updated, as with real hardware.
    pub fn set_write_fault(&mut self, code: Option<u8>) {
        self.write_fault = code;
    }
}

impl ClockPort for SoftRtc {
    fn is_time_set(&self) -> bool {
        self.anchor.is_some()
    }

    fn now(&self) -> NaiveDateTime {
        let Some((base, at)) = self.anchor else {
            return NaiveDateTime::default();
        };
        let elapsed = TimeDelta::from_std(at.elapsed()).unwrap_or(TimeDelta::zero());
        base.checked_add_signed(elapsed).unwrap_or(base)
    }

    fn set_time(&mut self, time: NaiveDateTime) -> Result<(), ClockError> {
        self.anchor = Some((time, Instant::now()));
        match self.write_fault {
            Some(code) => {
                warn!("SoftRtc: write failed with status {}", code);
                Err(ClockError::RtcWriteFailed(code))
            }
            None => Ok(()),
        }
    }

    fn read_temperature(&mut self) -> i16 {
        self.temperature_c
    }
}
