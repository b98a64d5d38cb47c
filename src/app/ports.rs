//! Port traits, the hexagonal boundary between the lighting core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (RTC, EEPROM, GPIO, buzzer, serial line) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the decision core never touches hardware directly.
//!
//! ## Contract notes
//!
//! - **ClockPort::set_time** updates the software clock even when the RTC
//!   write fails; the error only reports that the battery-backed copy is stale.
//! - **ByteStore** addresses 0 and 1 are reserved by [`crate::config`].
//! - **LineTransport::read_byte** must never block.

use chrono::NaiveDateTime;

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC → domain)
// ───────────────────────────────────────────────────────────────

/// Wall clock plus the RTC's on-die temperature sensor.
pub trait ClockPort {
    /// Whether wall-clock time has been established since power-up.
    fn is_time_set(&self) -> bool;

    /// Current wall-clock time.  Meaningless while [`is_time_set`](Self::is_time_set)
    /// is `false`.
    fn now(&self) -> NaiveDateTime;

    /// Set wall-clock time and write it through to the RTC.
    fn set_time(&mut self, time: NaiveDateTime) -> Result<(), ClockError>;

    /// Temperature in whole degrees Celsius.
    fn read_temperature(&mut self) -> i16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the lighting relay and the status indicator.
pub trait ActuatorPort {
    /// Energise (`true`) or release (`false`) the lighting output.
    fn set_lighting(&mut self, on: bool);

    /// Status LED; mirrors the lighting state.
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Alert port (driven adapter: domain → buzzer)
// ───────────────────────────────────────────────────────────────

/// How loudly an alert should nag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Audible notifications raised by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// Temperature band alert, repeated `repeat` times.
    Thermal { urgency: Urgency, repeat: u8 },
    /// A lights check was skipped because the clock is unset.
    TimeNotSet,
    /// An input byte was dropped because the line is full.
    InputOverflow,
}

/// Fire-and-forget alert sink.  Each call may take bounded time.
pub trait AlertPort {
    fn emit(&mut self, alert: Alert);
}

// ───────────────────────────────────────────────────────────────
// Byte store port (driven adapter: domain ↔ EEPROM)
// ───────────────────────────────────────────────────────────────

/// Byte-addressed persistent storage.
pub trait ByteStore {
    fn read_byte(&self, address: u16) -> Result<u8, StorageError>;

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Line transport port (driven adapter: serial ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented text console.
pub trait LineTransport {
    /// Next pending input byte, or `None` if nothing is available right now.
    fn read_byte(&mut self) -> Option<u8>;

    fn write_str(&mut self, s: &str);

    fn write_line(&mut self, line: &str) {
        self.write_str(line);
        self.write_str("\n");
    }
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ClockPort::set_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// The RTC rejected the write; carries the device status code.
    RtcWriteFailed(u8),
    /// The RTC did not answer on the bus.
    NotResponding,
}

/// Errors from [`ByteStore`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Address outside the device.
    OutOfRange,
    /// Generic I/O error.
    IoError,
}

/// Errors loading or validating [`ControllerSettings`](crate::config::ControllerSettings).
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file failed to parse.
    Corrupted,
    /// A settings field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RtcWriteFailed(code) => write!(f, "{}", code),
            Self::NotResponding => write!(f, "RTC not responding"),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "address out of range"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "settings corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
