//! Lights-check scheduler.
//!
//! Two pieces:
//!
//! - [`CheckTimer`] decides *when* to evaluate: once per interval, and
//!   immediately after the operator sends a command.
//! - [`Scheduler`] decides *what* the lights do on each evaluation.
//!
//! ```text
//!   tick ──▶ ThermalGuard ──denied──▶ Skipped
//!                │ allowed
//!                ▼
//!          clock set? ──no──▶ "time has not been set" ──▶ Skipped
//!                │ yes
//!                ▼
//!          window_for(today) ──▶ lights_off <= now <= lights_on ? Off : On
//! ```

use log::{debug, info};

use crate::app::ports::{ActuatorPort, Alert, AlertPort, ClockPort, LineTransport};
use crate::calendar::{CalendarDate, ClockTime};
use crate::config::LightingConfig;
use crate::error::{Error, Result};
use crate::policy::{DayWindow, window_for};
use crate::safety::{ThermalGuard, ThermalThresholds};

// ═══════════════════════════════════════════════════════════════
//  Check timer
// ═══════════════════════════════════════════════════════════════

/// Interval timer over a monotonic millisecond counter.
///
/// A timer that has never ticked, or was [`force`](Self::force)d, is due
/// immediately.  Elapsed time uses wrapping arithmetic so a counter rollover
/// does not stall the loop.
#[derive(Debug, Clone)]
pub struct CheckTimer {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl CheckTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn should_tick(&self, now_ms: u64) -> bool {
        self.last_ms
            .is_none_or(|last| now_ms.wrapping_sub(last) >= self.interval_ms)
    }

    pub fn mark_ticked(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    /// Make the next [`should_tick`](Self::should_tick) return `true`.
    pub fn force(&mut self) {
        self.last_ms = None;
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

// ═══════════════════════════════════════════════════════════════
//  Lighting scheduler
// ═══════════════════════════════════════════════════════════════

/// What one [`Scheduler::tick`] did to the lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingAction {
    On,
    Off,
    /// No window decision was made (thermal lockout or clock unset).
    Skipped,
}

/// Periodic lights evaluation.  Owns the thermal guard and nothing persistent.
pub struct Scheduler {
    guard: ThermalGuard,
    last_action: Option<LightingAction>,
}

impl Scheduler {
    pub fn new(thresholds: ThermalThresholds) -> Self {
        Self {
            guard: ThermalGuard::new(thresholds),
            last_action: None,
        }
    }

    /// Run one evaluation: thermal guard, then the daylight window.
    pub fn tick(
        &mut self,
        config: &LightingConfig,
        hw: &mut (impl ClockPort + ActuatorPort + AlertPort),
        console: &mut impl LineTransport,
    ) -> LightingAction {
        let temperature = hw.read_temperature();
        let assessment = self.guard.evaluate(temperature);

        if assessment.force_off {
            switch_lights(hw, console, false);
        }
        if let Some(alert) = assessment.alert {
            hw.emit(alert);
        }
        if !assessment.allow_lighting {
            debug!("Scheduler: lights check skipped ({:?})", assessment.band);
            return self.record(LightingAction::Skipped);
        }

        let window = match current_window(config, hw) {
            Ok(w) => w,
            Err(_) => {
                console.write_line("Can't check lights: time has not been set.");
                hw.emit(Alert::TimeNotSet);
                return self.record(LightingAction::Skipped);
            }
        };

        let now = ClockTime::of(&hw.now());
        let on = window.should_be_on(now);
        switch_lights(hw, console, on);
        self.record(if on {
            LightingAction::On
        } else {
            LightingAction::Off
        })
    }

    pub fn guard(&self) -> &ThermalGuard {
        &self.guard
    }

    /// Outcome of the most recent tick, if any.
    pub fn last_action(&self) -> Option<LightingAction> {
        self.last_action
    }

    fn record(&mut self, action: LightingAction) -> LightingAction {
        if self.last_action != Some(action) {
            info!("Scheduler: {:?} -> {:?}", self.last_action, action);
        }
        self.last_action = Some(action);
        action
    }
}

/// Today's window, or [`Error::TimeNotSet`] if the clock is not running.
fn current_window(config: &LightingConfig, clock: &impl ClockPort) -> Result<DayWindow> {
    if !clock.is_time_set() {
        return Err(Error::TimeNotSet);
    }
    let today = CalendarDate::from(clock.now().date());
    Ok(window_for(today, config))
}

/// Drive the lights and the indicator together and report it.
fn switch_lights(hw: &mut impl ActuatorPort, console: &mut impl LineTransport, on: bool) {
    hw.set_indicator(on);
    hw.set_lighting(on);
    console.write_line(if on { "Lights on." } else { "Lights off." });
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
