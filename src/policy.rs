//! Lights-on/lights-off window for a calendar day.
//!
//! Starts from the tabulated sunrise/sunset, widens the dark-side margin by
//! the extra minutes, then lets a fixed off time replace the morning edge.
//!
//! Offsets are applied in minutes-since-midnight and the results pinned to
//! `[00:00, 23:59]`; there is no wraparound into the neighbouring day.

use crate::astro;
use crate::calendar::{CalendarDate, ClockTime};
use crate::config::LightingConfig;

/// Sunrise/sunset and the effective switching times derived from them.
///
/// Recomputed for every query; never cached across dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    /// Evening switch-on time.
    pub lights_on: ClockTime,
    /// Morning switch-off time.
    pub lights_off: ClockTime,
}

impl DayWindow {
    /// Lights stay off in the closed interval `[lights_off, lights_on]`.
    pub fn is_lights_off_at(&self, now: ClockTime) -> bool {
        self.lights_off <= now && now <= self.lights_on
    }

    pub fn should_be_on(&self, now: ClockTime) -> bool {
        !self.is_lights_off_at(now)
    }
}

/// Apply the extra-minutes padding and fixed-off-time override.
pub fn compute_window(
    sunrise: ClockTime,
    sunset: ClockTime,
    extra_minutes: u8,
    fixed_off_time: Option<u8>,
) -> DayWindow {
    let mut lights_off = sunrise;
    let mut lights_on = sunset;

    if extra_minutes > 0 {
        let extra = i32::from(extra_minutes);
        lights_off = ClockTime::from_minutes_clamped(sunrise.minutes() + extra);
        lights_on = ClockTime::from_minutes_clamped(sunset.minutes() - extra);
    }

    if let Some(minutes) = fixed_off_time {
        lights_off = ClockTime::from_minutes_clamped(i32::from(minutes));
    }

    DayWindow {
        sunrise,
        sunset,
        lights_on,
        lights_off,
    }
}

/// Window for `date` under the current configuration.
pub fn window_for(date: CalendarDate, config: &LightingConfig) -> DayWindow {
    let (sunrise, sunset) = astro::lookup(date);
    compute_window(sunrise, sunset, config.extra_minutes, config.fixed_off_time)
}
