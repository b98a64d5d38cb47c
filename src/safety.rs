//! Thermal guard.
//!
//! The guard runs **every tick before the lights check** and classifies the
//! latest temperature reading into a band.  Above the shutdown threshold it
//! latches a `cooling` flag that keeps lighting blocked until a reading comes
//! back below the warning threshold.
//!
//! ## Band table
//!
//! | Reading             | Alert            | Lighting          | Side effect          |
//! |---------------------|------------------|-------------------|----------------------|
//! | `t >= shutdown`     | High × 6         | denied            | force OFF, latch     |
//! | `t >= critical`     | Medium × 4       | `!cooling`        |                      |
//! | `t >= warn`         | Low × 2          | `!cooling`        |                      |
//! | `t < warn`          |                  | allowed           | clear latch          |
//!
//! The guard itself is pure: it returns a [`ThermalAssessment`] and the
//! scheduler applies the forced OFF and emits the alert.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::{Alert, ConfigError, Urgency};

/// Temperature thresholds in whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermalThresholds {
    pub warn_c: i16,
    pub critical_c: i16,
    pub shutdown_c: i16,
}

impl Default for ThermalThresholds {
    fn default() -> Self {
        Self {
            warn_c: 50,
            critical_c: 70,
            shutdown_c: 80,
        }
    }
}

impl ThermalThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.warn_c < self.critical_c && self.critical_c < self.shutdown_c) {
            return Err(ConfigError::ValidationFailed(
                "thermal thresholds must satisfy warn < critical < shutdown",
            ));
        }
        if !(-40..=125).contains(&self.warn_c) || !(-40..=125).contains(&self.shutdown_c) {
            return Err(ConfigError::ValidationFailed(
                "thermal thresholds must be -40–125 C",
            ));
        }
        Ok(())
    }
}

/// Classification of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Normal,
    Warning,
    Critical,
    Shutdown,
}

/// Outcome of one [`ThermalGuard::evaluate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermalAssessment {
    pub band: TempBand,
    /// Whether the scheduler may run its lights check.
    pub allow_lighting: bool,
    /// Lights must be switched off now, regardless of the window.
    pub force_off: bool,
    pub alert: Option<Alert>,
}

/// Hysteresis state machine over periodic temperature readings.
pub struct ThermalGuard {
    thresholds: ThermalThresholds,
    last_temperature_c: Option<i16>,
    /// Latched on a shutdown reading, released below the warning threshold.
    cooling: bool,
}

impl ThermalGuard {
    pub fn new(thresholds: ThermalThresholds) -> Self {
        Self {
            thresholds,
            last_temperature_c: None,
            cooling: false,
        }
    }

    /// Classify `temperature_c` and update the cooling latch.
    pub fn evaluate(&mut self, temperature_c: i16) -> ThermalAssessment {
        self.last_temperature_c = Some(temperature_c);
        let t = &self.thresholds;

        if temperature_c >= t.shutdown_c {
            if !self.cooling {
                error!(
                    "THERMAL SHUTDOWN: {}C >= {}C, lights forced off",
                    temperature_c, t.shutdown_c
                );
            }
            self.cooling = true;
            return ThermalAssessment {
                band: TempBand::Shutdown,
                allow_lighting: false,
                force_off: true,
                alert: Some(Alert::Thermal {
                    urgency: Urgency::High,
                    repeat: 6,
                }),
            };
        }

        let (band, urgency, repeat) = if temperature_c >= t.critical_c {
            (TempBand::Critical, Urgency::Medium, 4)
        } else if temperature_c >= t.warn_c {
            (TempBand::Warning, Urgency::Low, 2)
        } else {
            if self.cooling {
                info!("Thermal: {}C, cooling latch released", temperature_c);
            }
            self.cooling = false;
            return ThermalAssessment {
                band: TempBand::Normal,
                allow_lighting: true,
                force_off: false,
                alert: None,
            };
        };

        warn!(
            "Thermal: {}C in {:?} band (cooling={})",
            temperature_c, band, self.cooling
        );
        ThermalAssessment {
            band,
            allow_lighting: !self.cooling,
            force_off: false,
            alert: Some(Alert::Thermal { urgency, repeat }),
        }
    }

    /// True while lighting is locked out after a shutdown reading.
    pub fn is_cooling(&self) -> bool {
        self.cooling
    }

    /// Most recent reading passed to [`evaluate`](Self::evaluate).
    pub fn last_temperature_c(&self) -> Option<i16> {
        self.last_temperature_c
    }

    pub fn thresholds(&self) -> &ThermalThresholds {
        &self.thresholds
    }
}
