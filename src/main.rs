//! GardenLights host controller, main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter         EepromAdapter    StdioConsole   │
//! │  (Clock+Actuator+Alert)  (ByteStore)      (LineTransport)│
//! │  SoftRtc · SimPin · Buzzer                Uptime         │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          AppService (pure logic)                   │  │
//! │  │  commands · Scheduler · ThermalGuard · policy      │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Environment:
//!
//! - `GARDENLIGHTS_EEPROM`: EEPROM image path (default `gardenlights.eeprom`).
//! - `GARDENLIGHTS_SETTINGS`: optional JSON [`ControllerSettings`] file.
//! - `GARDENLIGHTS_SEED_CLOCK`: if set, start with the host's local time
//!   instead of an unset clock.
//! - `RUST_LOG`: log filter (default `info`).
#![deny(unused_must_use)]

use std::env;
use std::fs;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use gardenlights::adapters::eeprom::EepromAdapter;
use gardenlights::adapters::hardware::HardwareAdapter;
use gardenlights::adapters::rtc::SoftRtc;
use gardenlights::adapters::serial::StdioConsole;
use gardenlights::adapters::time::Uptime;
use gardenlights::app::service::AppService;
use gardenlights::config::{ControllerSettings, LightingConfig};
use gardenlights::drivers::buzzer::Buzzer;
use gardenlights::drivers::sim_pin::SimPin;

const DEFAULT_EEPROM_PATH: &str = "gardenlights.eeprom";

/// Sleep between loop passes.
const POLL_PERIOD: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("GardenLights {} starting", env!("CARGO_PKG_VERSION"));

    let settings = load_settings()?;

    // ── Persistence ───────────────────────────────────────────
    let eeprom_path = env::var("GARDENLIGHTS_EEPROM").unwrap_or_else(|_| DEFAULT_EEPROM_PATH.into());
    let mut store = EepromAdapter::open(&eeprom_path)
        .with_context(|| format!("opening EEPROM image {eeprom_path}"))?;
    let config = LightingConfig::load(&store);

    // ── Hardware ──────────────────────────────────────────────
    let rtc = if env::var_os("GARDENLIGHTS_SEED_CLOCK").is_some() {
        SoftRtc::from_host_clock()
    } else {
        SoftRtc::new()
    };
    let mut hw = HardwareAdapter::new(
        SimPin::new("lights"),
        SimPin::new("indicator"),
        rtc,
        Buzzer::new(),
    );
    hw.power_on();

    let mut console = StdioConsole::stdio().context("starting console reader")?;
    let uptime = Uptime::new();

    // ── Main loop ─────────────────────────────────────────────
    let mut app = AppService::new(config, &settings);
    app.start(&hw, &mut console);

    loop {
        app.poll(uptime.uptime_ms(), &mut hw, &mut store, &mut console);
        if console.is_closed() {
            info!("Console closed, shutting down");
            return Ok(());
        }
        thread::sleep(POLL_PERIOD);
    }
}

fn load_settings() -> Result<ControllerSettings> {
    let Some(path) = env::var_os("GARDENLIGHTS_SETTINGS") else {
        return Ok(ControllerSettings::default());
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("reading settings {}", path.to_string_lossy()))?;
    let settings = ControllerSettings::from_json(&text)
        .with_context(|| format!("loading settings {}", path.to_string_lossy()))?;
    info!("Settings loaded from {}: {:?}", path.to_string_lossy(), settings);
    Ok(settings)
}
