//! Fuzz target: `LineAssembler::push`
//!
//! Feeds an arbitrary byte stream through the assembler and every completed
//! line through the parser.  Lines never exceed the buffer and never carry
//! the bytes the assembler consumes itself.
//!
//! cargo fuzz run fuzz_line_assembler

#![no_main]

use gardenlights::app::commands;
use gardenlights::input::{CANCEL, Intake, LineAssembler, MAX_INPUT_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut asm = LineAssembler::new();
    for &b in data {
        if let Ok(Intake::Complete(line)) = asm.push(b) {
            assert!(line.len() <= MAX_INPUT_LEN);
            assert!(!line.iter().any(|&c| c == b'\n' || c == b'\r' || c == CANCEL));
            let _ = commands::parse(&line);
        }
        assert!(asm.pending().len() <= MAX_INPUT_LEN);
    }
});
