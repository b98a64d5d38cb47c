//! Peripheral drivers: buzzer and GPIO outputs.

pub mod buzzer;
pub mod sim_pin;
