//! Serial console adapter.
//!
//! Implements [`LineTransport`] over a byte reader and a writer.  A helper
//! thread blocks on the reader and forwards bytes through an `mpsc` channel,
//! so [`read_byte`](LineTransport::read_byte) is a non-blocking `try_recv`.
//! Output is flushed after every write so echoes show up immediately.

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::{info, warn};

use crate::app::ports::LineTransport;

pub struct StreamConsole<W: Write> {
    rx: Receiver<u8>,
    out: W,
    closed: bool,
}

/// Console on the process's stdin/stdout.
pub type StdioConsole = StreamConsole<io::Stdout>;

impl StdioConsole {
    pub fn stdio() -> io::Result<Self> {
        Self::spawn(io::stdin(), io::stdout())
    }
}

impl<W: Write> StreamConsole<W> {
    /// Start the reader thread for `input` and write to `out`.
    pub fn spawn<R: Read + Send + 'static>(input: R, out: W) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("console-rx".into())
            .spawn(move || {
                for byte in input.bytes() {
                    match byte {
                        Ok(b) => {
                            if tx.send(b).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("Console: read failed: {}", e);
                            break;
                        }
                    }
                }
            })?;
        Ok(Self {
            rx,
            out,
            closed: false,
        })
    }

    /// `true` once the input side has reached end of stream and drained.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> LineTransport for StreamConsole<W> {
    fn read_byte(&mut self) -> Option<u8> {
        match self.rx.try_recv() {
            Ok(b) => Some(b),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.closed {
                    info!("Console: input closed");
                    self.closed = true;
                }
                None
            }
        }
    }

    fn write_str(&mut self, s: &str) {
        let written = self
            .out
            .write_all(s.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!("Console: write failed: {}", e);
        }
    }
}
