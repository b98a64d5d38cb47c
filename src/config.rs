//! Controller configuration.
//!
//! Two layers:
//!
//! - [`LightingConfig`]: the user adjustments (fixed off time, extra
//!   minutes).  Changed over the command protocol and persisted one byte per
//!   field through a [`ByteStore`].
//! - [`ControllerSettings`]: deployment tunables (check interval, thermal
//!   thresholds).  Read once at startup from an optional JSON file.
//!
//! ## Persisted layout
//!
//! | Address | Field             | Encoding                      |
//! |---------|-------------------|-------------------------------|
//! | 0       | fixed off time    | minutes after midnight, 255 = disabled |
//! | 1       | extra minutes     | 0–255                         |

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::ports::{ByteStore, ConfigError, StorageError};
use crate::safety::ThermalThresholds;

pub const FIXED_OFF_TIME_ADDR: u16 = 0;
pub const EXTRA_MINUTES_ADDR: u16 = 1;
/// Byte value meaning "no fixed off time".
pub const FIXED_OFF_TIME_DISABLED: u8 = 255;

/// Decode the persisted fixed-off-time byte.
pub const fn decode_fixed_off_time(byte: u8) -> Option<u8> {
    if byte == FIXED_OFF_TIME_DISABLED {
        None
    } else {
        Some(byte)
    }
}

/// Encode a fixed off time for persistence.
pub const fn encode_fixed_off_time(minutes: Option<u8>) -> u8 {
    match minutes {
        Some(m) => m,
        None => FIXED_OFF_TIME_DISABLED,
    }
}

// ───────────────────────────────────────────────────────────────
// LightingConfig
// ───────────────────────────────────────────────────────────────

/// User lighting adjustments, cached in memory after [`load`](Self::load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightingConfig {
    /// Absolute lights-off time in minutes after midnight, replacing the
    /// sunrise-derived one.
    pub fixed_off_time: Option<u8>,
    /// Padding added to sunrise and subtracted from sunset.
    pub extra_minutes: u8,
}

impl LightingConfig {
    /// Load from the byte store.  A field that cannot be read falls back to
    /// its default (override disabled, no padding).
    pub fn load(store: &impl ByteStore) -> Self {
        let fixed_off_time = match store.read_byte(FIXED_OFF_TIME_ADDR) {
            Ok(byte) => decode_fixed_off_time(byte),
            Err(e) => {
                warn!("LightingConfig: fixed off time unreadable ({}), disabled", e);
                None
            }
        };
        let extra_minutes = match store.read_byte(EXTRA_MINUTES_ADDR) {
            Ok(byte) => byte,
            Err(e) => {
                warn!("LightingConfig: extra minutes unreadable ({}), using 0", e);
                0
            }
        };
        let cfg = Self {
            fixed_off_time,
            extra_minutes,
        };
        info!(
            "LightingConfig: loaded fixed_off_time={:?} extra_minutes={}",
            cfg.fixed_off_time, cfg.extra_minutes
        );
        cfg
    }

    /// Update the fixed off time and write it through.
    ///
    /// The in-memory value changes even if the write fails.  `Some(255)`
    /// collides with the sentinel and is stored as disabled.
    pub fn set_fixed_off_time(
        &mut self,
        store: &mut impl ByteStore,
        minutes: Option<u8>,
    ) -> Result<(), StorageError> {
        self.fixed_off_time = minutes.and_then(decode_fixed_off_time);
        info!("LightingConfig: fixed off time -> {:?}", self.fixed_off_time);
        store.write_byte(
            FIXED_OFF_TIME_ADDR,
            encode_fixed_off_time(self.fixed_off_time),
        )
    }

    /// Update the extra minutes and write them through.
    pub fn set_extra_minutes(
        &mut self,
        store: &mut impl ByteStore,
        minutes: u8,
    ) -> Result<(), StorageError> {
        self.extra_minutes = minutes;
        info!("LightingConfig: extra minutes -> {}", minutes);
        store.write_byte(EXTRA_MINUTES_ADDR, minutes)
    }
}

// ───────────────────────────────────────────────────────────────
// ControllerSettings
// ───────────────────────────────────────────────────────────────

/// Deployment tunables.  Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Seconds between lights checks.
    pub check_interval_secs: u32,
    /// Thermal guard thresholds.
    pub thermal: ThermalThresholds,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            check_interval_secs: 60,
            thermal: ThermalThresholds::default(),
        }
    }
}

impl ControllerSettings {
    /// Parse and validate a JSON settings document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text).map_err(|_| ConfigError::Corrupted)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=3600).contains(&self.check_interval_secs) {
            return Err(ConfigError::ValidationFailed(
                "check_interval_secs must be 1–3600",
            ));
        }
        self.thermal.validate()
    }

    pub fn check_interval_ms(&self) -> u64 {
        u64::from(self.check_interval_secs) * 1000
    }
}
