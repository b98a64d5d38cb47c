//! Simulated GPIO output.
//!
//! Implements `embedded_hal::digital::OutputPin` over an in-memory level so
//! the host build can drive the lighting relay and indicator LED through the
//! same trait a board HAL would provide.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use log::trace;

/// Output pin that remembers its level.
#[derive(Debug)]
pub struct SimPin {
    name: &'static str,
    high: bool,
}

impl SimPin {
    /// A pin that starts low.
    pub fn new(name: &'static str) -> Self {
        Self { name, high: false }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current level without going through the fallible HAL accessor.
    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        trace!("{}: low", self.name);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        trace!("{}: high", self.name);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}
