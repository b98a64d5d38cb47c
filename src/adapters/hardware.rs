//! Hardware adapter, bridging peripherals to the domain port traits.
//!
//! Owns the lighting relay pin, the indicator LED pin, the clock and the
//! buzzer, exposing them through [`ClockPort`], [`ActuatorPort`] and
//! [`AlertPort`].  Pins are any `embedded_hal` [`OutputPin`]; the host build
//! uses [`SimPin`](crate::drivers::sim_pin::SimPin).

use chrono::NaiveDateTime;
use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::app::ports::{ActuatorPort, Alert, AlertPort, ClockError, ClockPort};
use crate::drivers::buzzer::{Buzzer, STARTUP_CHIME};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<L, I, C> {
    lights: L,
    indicator: I,
    clock: C,
    buzzer: Buzzer,
}

impl<L: OutputPin, I: OutputPin, C: ClockPort> HardwareAdapter<L, I, C> {
    pub fn new(lights: L, indicator: I, clock: C, buzzer: Buzzer) -> Self {
        Self {
            lights,
            indicator,
            clock,
            buzzer,
        }
    }

    /// Power-on sequence: chime, then lights and indicator off.
    pub fn power_on(&mut self) {
        self.buzzer.play(&STARTUP_CHIME);
        self.set_lighting(false);
        self.set_indicator(false);
    }

    pub fn lights(&self) -> &L {
        &self.lights
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn buzzer(&self) -> &Buzzer {
        &self.buzzer
    }
}

fn drive(pin: &mut impl OutputPin, on: bool, what: &str) {
    if let Err(e) = pin.set_state(PinState::from(on)) {
        warn!("{} pin write failed: {:?}", what, e);
    }
}

// ── ClockPort implementation ──────────────────────────────────

impl<L, I, C: ClockPort> ClockPort for HardwareAdapter<L, I, C> {
    fn is_time_set(&self) -> bool {
        self.clock.is_time_set()
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    fn set_time(&mut self, time: NaiveDateTime) -> Result<(), ClockError> {
        self.clock.set_time(time)
    }

    fn read_temperature(&mut self) -> i16 {
        self.clock.read_temperature()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<L: OutputPin, I: OutputPin, C> ActuatorPort for HardwareAdapter<L, I, C> {
    fn set_lighting(&mut self, on: bool) {
        drive(&mut self.lights, on, "lights");
    }

    fn set_indicator(&mut self, on: bool) {
        drive(&mut self.indicator, on, "indicator");
    }
}

// ── AlertPort implementation ──────────────────────────────────

impl<L, I, C> AlertPort for HardwareAdapter<L, I, C> {
    fn emit(&mut self, alert: Alert) {
        self.buzzer.alert(alert);
    }
}
