//! Piezo buzzer driver.
//!
//! Alerts are encoded as short tone sequences; urgency shows up as shorter,
//! more numerous pulses.
//!
//! | Alert            | Sequence                          |
//! |------------------|-----------------------------------|
//! | Thermal High     | 6 × 1200 Hz / 300 ms              |
//! | Thermal Medium   | 4 × 1200 Hz / 600 ms              |
//! | Thermal Low      | 2 × 1200 Hz / 1000 ms             |
//! | InputOverflow    | 400 Hz / 200 ms                   |
//! | TimeNotSet       | 600 Hz / 600 ms, 400 Hz / 400 ms  |
//!
//! On the host there is no transducer: each tone is logged and counted.

use heapless::Vec;
use log::debug;

use crate::app::ports::{Alert, Urgency};

/// Longest sequence any alert produces.
pub const MAX_TONES: usize = 8;

const THERMAL_HZ: u16 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

impl Tone {
    pub const fn new(freq_hz: u16, duration_ms: u16) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }
}

pub type Melody = Vec<Tone, MAX_TONES>;

/// Power-on chime: C5, C4, C5.
pub const STARTUP_CHIME: [Tone; 3] = [
    Tone::new(523, 500),
    Tone::new(262, 500),
    Tone::new(523, 500),
];

const OVERFLOW_TONES: [Tone; 1] = [Tone::new(400, 200)];

const TIME_NOT_SET_TONES: [Tone; 2] = [Tone::new(600, 600), Tone::new(400, 400)];

/// Tone sequence for `alert`.
pub fn melody_for(alert: Alert) -> Melody {
    match alert {
        Alert::Thermal { urgency, repeat } => {
            let duration_ms = match urgency {
                Urgency::High => 300,
                Urgency::Medium => 600,
                Urgency::Low => 1000,
            };
            core::iter::repeat_n(
                Tone::new(THERMAL_HZ, duration_ms),
                usize::from(repeat).min(MAX_TONES),
            )
            .collect()
        }
        Alert::InputOverflow => OVERFLOW_TONES.into_iter().collect(),
        Alert::TimeNotSet => TIME_NOT_SET_TONES.into_iter().collect(),
    }
}

#[derive(Debug, Default)]
pub struct Buzzer {
    tones_played: u32,
    busy_ms: u64,
}

impl Buzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert(&mut self, alert: Alert) {
        debug!("Buzzer: {:?}", alert);
        self.play(&melody_for(alert));
    }

    pub fn play(&mut self, tones: &[Tone]) {
        for tone in tones {
            debug!("Buzzer: {} Hz for {} ms", tone.freq_hz, tone.duration_ms);
            self.tones_played += 1;
            self.busy_ms += u64::from(tone.duration_ms);
        }
    }

    /// Tones played since power-up.
    pub fn tones_played(&self) -> u32 {
        self.tones_played
    }

    /// Total sounding time since power-up.
    pub fn busy_ms(&self) -> u64 {
        self.busy_ms
    }
}
