//! Application service, the hexagonal core.
//!
//! [`AppService`] owns the cached lighting configuration, the scheduler and
//! its check timer, and the serial line assembler.  All I/O flows through
//! port traits passed in at call sites, so the whole service runs against
//! mock adapters in tests.
//!
//! ```text
//!   LineTransport ──▶ ┌──────────────────────────┐ ──▶ ActuatorPort
//!                     │        AppService         │
//!       ClockPort ◀──▶│  commands · scheduler     │ ──▶ AlertPort
//!                     └──────────────────────────┘
//!                                  │
//!                                  ▼
//!                              ByteStore
//! ```

use log::{debug, info, warn};

use crate::calendar::CalendarDate;
use crate::config::{ControllerSettings, LightingConfig, decode_fixed_off_time};
use crate::error::{Error, Result};
use crate::input::{Intake, LineAssembler};
use crate::policy::window_for;
use crate::scheduler::{CheckTimer, LightingAction, Scheduler};

use super::commands::{self, Command, DateDigits};
use super::ports::{ActuatorPort, Alert, AlertPort, ByteStore, ClockPort, LineTransport};

const HELP: &[&str] = &[
    "h: Help.",
    "i[yyyyMMdd]: Date info.",
    "tyyyyMMddHHmmss: Set time and date.",
    "f[mmm]: Fixed off time.",
    "x[mmm]: Extra minutes.",
];

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: LightingConfig,
    scheduler: Scheduler,
    timer: CheckTimer,
    input: LineAssembler,
}

impl AppService {
    /// Construct the service from the persisted configuration and the
    /// deployment settings.  Prints nothing until [`start`](Self::start).
    pub fn new(config: LightingConfig, settings: &ControllerSettings) -> Self {
        Self {
            config,
            scheduler: Scheduler::new(settings.thermal),
            timer: CheckTimer::new(settings.check_interval_ms()),
            input: LineAssembler::new(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Greet the operator and warn if the RTC has lost its time.
    pub fn start(&mut self, clock: &impl ClockPort, console: &mut impl LineTransport) {
        print_help(console);
        if !clock.is_time_set() {
            console.write_line("RTC lost power. Set time.");
            warn!("AppService: clock not set at startup");
        }
        info!(
            "AppService started (check every {} ms, {:?})",
            self.timer.interval_ms(),
            self.config
        );
    }

    // ── Control loop ──────────────────────────────────────────

    /// One pass of the cooperative loop.
    ///
    /// Drains input until a line completes (handling it and forcing an
    /// immediate lights check), then ticks if the check timer is due.
    /// Returns the tick outcome when a tick ran.
    pub fn poll(
        &mut self,
        now_ms: u64,
        hw: &mut (impl ClockPort + ActuatorPort + AlertPort),
        store: &mut impl ByteStore,
        console: &mut impl LineTransport,
    ) -> Option<LightingAction> {
        if let Some(line) = self.drain_input(hw, console) {
            self.handle_line(&line, hw, store, console);
            self.timer.force();
        }

        if !self.timer.should_tick(now_ms) {
            return None;
        }
        let action = self.tick(hw, console);
        self.timer.mark_ticked(now_ms);
        Some(action)
    }

    /// Run a lights check now, regardless of the timer.
    pub fn tick(
        &mut self,
        hw: &mut (impl ClockPort + ActuatorPort + AlertPort),
        console: &mut impl LineTransport,
    ) -> LightingAction {
        self.scheduler.tick(&self.config, hw, console)
    }

    /// Parse and execute one completed line, reporting any failure.
    pub fn handle_line(
        &mut self,
        line: &[u8],
        hw: &mut (impl ClockPort + ActuatorPort + AlertPort),
        store: &mut impl ByteStore,
        console: &mut impl LineTransport,
    ) {
        let outcome = commands::parse(line).and_then(|cmd| self.execute(cmd, hw, store, console));
        if let Err(e) = outcome {
            report(e, console);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &LightingConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Whether the thermal guard is holding the lights off.
    pub fn is_cooling(&self) -> bool {
        self.scheduler.guard().is_cooling()
    }

    // ── Internal ──────────────────────────────────────────────

    fn drain_input(
        &mut self,
        hw: &mut impl AlertPort,
        console: &mut impl LineTransport,
    ) -> Option<crate::input::Line> {
        while let Some(byte) = console.read_byte() {
            match self.input.push(byte) {
                Ok(Intake::Accepted(b)) => echo(b, console),
                Ok(Intake::Ignored) => {}
                Ok(Intake::Cancelled) => console.write_line("\nInput canceled."),
                Ok(Intake::Complete(line)) => {
                    console.write_str("\n");
                    return Some(line);
                }
                Err(e) => {
                    report(e, console);
                    hw.emit(Alert::InputOverflow);
                }
            }
        }
        None
    }

    fn execute(
        &mut self,
        cmd: Command,
        hw: &mut (impl ClockPort + ActuatorPort + AlertPort),
        store: &mut impl ByteStore,
        console: &mut impl LineTransport,
    ) -> Result<()> {
        debug!("AppService: {:?}", cmd);
        match cmd {
            Command::Help => {
                print_help(console);
                Ok(())
            }
            Command::Info(date) => self.print_info(date, hw, console),
            Command::SetTime(time) => {
                let written = hw.set_time(time);
                if let Err(e) = written {
                    report(Error::from(e), console);
                }
                if hw.is_time_set() {
                    info!("AppService: clock set to {}", time);
                    print_now(&*hw, console);
                } else {
                    console.write_line("Failed to set time.");
                }
                Ok(())
            }
            Command::SetFixedOffTime(minutes) => {
                let written = self
                    .config
                    .set_fixed_off_time(store, decode_fixed_off_time(minutes));
                print_fixed_off_time(self.config.fixed_off_time, console);
                written.map_err(Error::from)
            }
            Command::SetExtraMinutes(minutes) => {
                let written = self.config.set_extra_minutes(store, minutes);
                print_extra_minutes(self.config.extra_minutes, console);
                written.map_err(Error::from)
            }
        }
    }

    fn print_info(
        &self,
        date: Option<DateDigits>,
        hw: &mut impl ClockPort,
        console: &mut impl LineTransport,
    ) -> Result<()> {
        if !hw.is_time_set() {
            return Err(Error::TimeNotSet);
        }
        let date = match date {
            Some(digits) => digits.to_date()?,
            None => CalendarDate::from(hw.now().date()),
        };
        let window = window_for(date, &self.config);

        print_now(&*hw, console);
        console.write_line(&format!("For     {date}"));
        console.write_line(&format!("Sunrise {}", window.sunrise));
        console.write_line(&format!("Sunset  {}", window.sunset));
        print_fixed_off_time(self.config.fixed_off_time, console);
        print_extra_minutes(self.config.extra_minutes, console);
        console.write_line(&format!("Lights Off {}", window.lights_off));
        console.write_line(&format!("Lights On  {}", window.lights_on));
        console.write_line(&format!("Temp {} C", hw.read_temperature()));
        Ok(())
    }
}

/// Tell the operator (and the log) what went wrong.  Nothing here is fatal.
fn report(e: Error, console: &mut impl LineTransport) {
    match e {
        Error::Validation(why) => {
            debug!("AppService: rejected line: {}", why);
            console.write_line("Bad input.");
        }
        Error::TimeNotSet => console.write_line("Time has not been set."),
        Error::ClockWrite(err) => {
            warn!("AppService: RTC write failed: {}", err);
            console.write_line(&format!("Failed to set RTC: {err}"));
        }
        Error::InputOverflow => console.write_line("\nInput overflow."),
        Error::Storage(err) => warn!("AppService: setting not persisted: {}", err),
    }
}

/// Echo one accepted byte.  The console is text, so only ASCII is echoed
/// verbatim; anything else shows as `?` but stays in the line.
fn echo(byte: u8, console: &mut impl LineTransport) {
    let shown = if byte.is_ascii() { char::from(byte) } else { '?' };
    let mut utf8 = [0u8; 4];
    console.write_str(shown.encode_utf8(&mut utf8));
}

fn print_help(console: &mut impl LineTransport) {
    console.write_line(&format!("GardenLights, {}", env!("CARGO_PKG_VERSION")));
    for line in HELP {
        console.write_line(line);
    }
}

fn print_now(clock: &impl ClockPort, console: &mut impl LineTransport) {
    console.write_line(&format!("It is {}", clock.now().format("%Y-%m-%d %H:%M:%S")));
}

fn print_fixed_off_time(fixed_off_time: Option<u8>, console: &mut impl LineTransport) {
    match fixed_off_time {
        Some(m) => console.write_line(&format!("Fixed off time set to {:02}:{:02}", m / 60, m % 60)),
        None => console.write_line("Fixed off time set to 'disabled'."),
    }
}

fn print_extra_minutes(extra_minutes: u8, console: &mut impl LineTransport) {
    console.write_line(&format!("Extra minutes {extra_minutes}"));
}
