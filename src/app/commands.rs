//! Inbound commands to the application service.
//!
//! One command per line: the first byte is the command code, the rest is a
//! code-specific payload of ASCII digits.
//!
//! | Code | Payload            | Command                          |
//! |------|--------------------|----------------------------------|
//! | `h`  | ignored            | [`Command::Help`]                |
//! | `i`  | none or `yyyyMMdd` | [`Command::Info`]                |
//! | `t`  | `yyyyMMddHHmmss`   | [`Command::SetTime`]             |
//! | `f`  | 1–4 digits, 1–255  | [`Command::SetFixedOffTime`]     |
//! | `x`  | 1–4 digits, 0–255  | [`Command::SetExtraMinutes`]     |
//!
//! Every rejection is an [`Error::Validation`]; the caller answers with the
//! generic "Bad input." and changes nothing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::{CalendarDate, is_valid_time};
use crate::error::{Error, Result};

/// Commands the operator can send over the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print usage.
    Help,
    /// Report the lighting window for today (`None`) or the given date.
    Info(Option<DateDigits>),
    /// Set the wall clock.
    SetTime(NaiveDateTime),
    /// Set the fixed off time in minutes after midnight.  255 disables it.
    SetFixedOffTime(u8),
    /// Set the extra-minutes padding.
    SetExtraMinutes(u8),
}

/// The `yyyyMMdd` payload of an info request.
///
/// Only the length is checked at parse time.  The digits are validated after
/// the clock check, so an unset clock wins over a bad date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateDigits([u8; 8]);

impl DateDigits {
    pub fn to_date(self) -> Result<CalendarDate> {
        let year = digits(&self.0[0..4])?;
        let month = digits(&self.0[4..6])?;
        let day = digits(&self.0[6..8])?;
        CalendarDate::new(year, month as u8, day as u8).ok_or(Error::Validation("invalid date"))
    }
}

/// Parse one completed input line.
pub fn parse(line: &[u8]) -> Result<Command> {
    let Some((&code, payload)) = line.split_first() else {
        return Err(Error::Validation("empty line"));
    };
    match code {
        b'h' => Ok(Command::Help),
        b'i' => parse_info(payload),
        b't' => parse_set_time(payload),
        b'f' => {
            let minutes = parse_small_number(payload)?;
            if !(1..=255).contains(&minutes) {
                return Err(Error::Validation("fixed off time must be 1-255"));
            }
            Ok(Command::SetFixedOffTime(minutes as u8))
        }
        b'x' => {
            let minutes = parse_small_number(payload)?;
            let minutes =
                u8::try_from(minutes).map_err(|_| Error::Validation("extra minutes must be 0-255"))?;
            Ok(Command::SetExtraMinutes(minutes))
        }
        _ => Err(Error::Validation("unknown command")),
    }
}

fn parse_info(payload: &[u8]) -> Result<Command> {
    if payload.is_empty() {
        return Ok(Command::Info(None));
    }
    <[u8; 8]>::try_from(payload)
        .map(|raw| Command::Info(Some(DateDigits(raw))))
        .map_err(|_| Error::Validation("info takes no payload or yyyyMMdd"))
}

fn parse_set_time(payload: &[u8]) -> Result<Command> {
    if payload.len() != 14 {
        return Err(Error::Validation("time must be yyyyMMddHHmmss"));
    }
    let year = digits(&payload[0..4])?;
    let month = digits(&payload[4..6])? as u8;
    let day = digits(&payload[6..8])? as u8;
    let hour = digits(&payload[8..10])? as u8;
    let minute = digits(&payload[10..12])? as u8;
    let second = digits(&payload[12..14])? as u8;

    let date = CalendarDate::new(year as u16, month, day).ok_or(Error::Validation("invalid date"))?;
    if !is_valid_time(hour, minute, second) {
        return Err(Error::Validation("invalid time of day"));
    }
    // February 29th passes the date check in every year; only real dates can
    // be written to the clock.
    let date: NaiveDate = date
        .to_naive()
        .ok_or(Error::Validation("date does not exist in that year"))?;
    date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
        .map(Command::SetTime)
        .ok_or(Error::Validation("invalid time of day"))
}

/// 1–4 ASCII digits.
fn parse_small_number(payload: &[u8]) -> Result<u16> {
    if payload.is_empty() || payload.len() > 4 {
        return Err(Error::Validation("expected 1-4 digits"));
    }
    digits(payload)
}

fn digits(field: &[u8]) -> Result<u16> {
    field.iter().try_fold(0u16, |acc, &b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u16::from(b - b'0'))
        } else {
            Err(Error::Validation("expected digits"))
        }
    })
}
