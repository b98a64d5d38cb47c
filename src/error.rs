//! Unified error types for the lighting controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` and none
//! of them is fatal: the loop reports the condition and keeps running.

use core::fmt;

use crate::app::ports::{ClockError, StorageError};

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A command payload was malformed or out of range.  Reported to the
    /// operator as "Bad input."; no state changes.
    Validation(&'static str),
    /// Wall-clock time has never been set.  Retried on every tick.
    TimeNotSet,
    /// The RTC rejected a time write.  The software clock was still updated.
    ClockWrite(ClockError),
    /// An input byte arrived with the line buffer full and was dropped.
    InputOverflow,
    /// A persisted setting could not be written or read back.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(why) => write!(f, "bad input: {why}"),
            Self::TimeNotSet => write!(f, "time has not been set"),
            Self::ClockWrite(e) => write!(f, "failed to set RTC: {e}"),
            Self::InputOverflow => write!(f, "input overflow"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ClockError> for Error {
    fn from(e: ClockError) -> Self {
        Self::ClockWrite(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
