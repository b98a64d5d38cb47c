//! Bounded line assembly from a byte stream.
//!
//! Bytes arrive one at a time from the serial port.  The assembler keeps at
//! most [`MAX_INPUT_LEN`] of them; anything past that is dropped and reported,
//! but the truncated line is still delivered on newline.
//!
//! | Byte        | Effect                                     |
//! |-------------|--------------------------------------------|
//! | `\r`        | ignored                                    |
//! | `0x08`      | line cleared, [`Intake::Cancelled`]        |
//! | `\n`        | line handed off, [`Intake::Complete`]      |
//! | other       | appended, or `Err(InputOverflow)` if full  |

use heapless::Vec;

use crate::error::{Error, Result};

/// Usable line capacity in bytes.
pub const MAX_INPUT_LEN: usize = 31;

/// Backspace clears the line in progress.
pub const CANCEL: u8 = 0x08;

/// A completed input line.
pub type Line = Vec<u8, MAX_INPUT_LEN>;

/// Result of feeding one byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intake {
    /// Byte stored; echo it back.
    Accepted(u8),
    /// Byte discarded without comment (`\r`).
    Ignored,
    /// Line in progress discarded.
    Cancelled,
    /// Newline received; the line buffer has been reset.
    Complete(Line),
}

#[derive(Debug, Default)]
pub struct LineAssembler {
    buf: Line,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Feed one byte.  `Err(Error::InputOverflow)` means the byte was dropped;
    /// keep feeding.
    pub fn push(&mut self, byte: u8) -> Result<Intake> {
        match byte {
            b'\r' => Ok(Intake::Ignored),
            CANCEL => {
                self.buf.clear();
                Ok(Intake::Cancelled)
            }
            b'\n' => Ok(Intake::Complete(core::mem::take(&mut self.buf))),
            _ => self
                .buf
                .push(byte)
                .map(|()| Intake::Accepted(byte))
                .map_err(|_| Error::InputOverflow),
        }
    }

    /// Bytes held for the line in progress.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }
}
