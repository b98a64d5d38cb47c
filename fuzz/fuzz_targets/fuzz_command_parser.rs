//! Fuzz target: `commands::parse`
//!
//! Arbitrary lines must either parse or be rejected as bad input; nothing
//! else is allowed out of the parser.  Accepted values must be in range.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use gardenlights::app::commands::{self, Command};
use gardenlights::error::Error;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match commands::parse(data) {
        Ok(Command::SetFixedOffTime(m)) => assert!(m >= 1, "f0 must be rejected"),
        Ok(Command::Info(Some(_))) => assert_eq!(data.len(), 9),
        Ok(Command::SetTime(_)) => assert_eq!(data.len(), 15),
        Ok(_) => {}
        Err(Error::Validation(_)) => {}
        Err(other) => panic!("parser produced {other:?}"),
    }
});
