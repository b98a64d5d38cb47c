//! Integration tests for the AppService loop: input → command → lights.
//!
//! These run on the host and drive the service exactly as the binary does,
//! one `poll` at a time, against recording mocks.

use gardenlights::config::ControllerSettings;
use gardenlights::scheduler::LightingAction;

use crate::mock_hw::{HwCall, MockEeprom, MockHardware, Rig};

// ── Startup ───────────────────────────────────────────────────

#[test]
fn startup_prints_help_and_rtc_notice() {
    let rig = Rig::new(MockHardware::new(), MockEeprom::new());
    assert!(rig.console.output.starts_with("GardenLights, "));
    assert!(rig.console.output.contains("tyyyyMMddHHmmss: Set time and date.\n"));
    assert!(rig.console.output.ends_with("RTC lost power. Set time.\n"));
}

#[test]
fn startup_with_running_clock_skips_rtc_notice() {
    let rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    assert!(!rig.console.output.contains("RTC lost power"));
}

// ── Time-not-set → set time → info ───────────────────────────

#[test]
fn set_time_then_query_the_window() {
    let mut rig = Rig::new(MockHardware::new(), MockEeprom::new());

    let out = rig.send("i");
    assert!(out.starts_with("i\nTime has not been set.\n"), "got {out:?}");
    assert!(out.contains("Can't check lights: time has not been set.\n"));

    let out = rig.send("t20240615143000");
    assert!(out.contains("It is 2024-06-15 14:30:00\n"), "got {out:?}");
    assert!(out.ends_with("Lights off.\n"));
    assert_eq!(rig.hw.lights_on(), Some(false));

    let out = rig.send("i20240615");
    for line in [
        "For     2024-06-15\n",
        "Sunrise 04:18\n",
        "Sunset  21:02\n",
        "Fixed off time set to 'disabled'.\n",
        "Extra minutes 0\n",
        "Lights Off 04:18\n",
        "Lights On  21:02\n",
        "Temp 22 C\n",
    ] {
        assert!(out.contains(line), "missing {line:?} in {out:?}");
    }
}

#[test]
fn info_for_another_day_uses_that_days_table_entry() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    let out = rig.send("i20240101");
    assert!(out.contains("It is 2024-06-15 12:00:00\n"));
    assert!(out.contains("For     2024-01-01\n"));
    assert!(out.contains("Sunrise 08:48\n"));
    assert!(out.contains("Sunset  16:37\n"));
}

#[test]
fn unset_clock_alerts_on_every_check() {
    let mut rig = Rig::new(MockHardware::new(), MockEeprom::new());
    assert_eq!(rig.poll_after(0), Some(LightingAction::Skipped));
    assert_eq!(rig.poll_after(60_000), Some(LightingAction::Skipped));
    assert_eq!(rig.hw.alerts().len(), 2);
    assert_eq!(rig.hw.lighting_writes(), 0);
}

// ── Check timer ───────────────────────────────────────────────

#[test]
fn periodic_check_follows_the_interval() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    assert_eq!(rig.poll_after(0), Some(LightingAction::Off));
    assert_eq!(rig.poll_after(30_000), None);
    assert_eq!(rig.poll_after(29_999), None);
    assert_eq!(rig.poll_after(1), Some(LightingAction::Off));
}

#[test]
fn configured_interval_is_honoured() {
    let settings = ControllerSettings {
        check_interval_secs: 5,
        ..ControllerSettings::default()
    };
    let mut rig = Rig::with_settings(
        MockHardware::at(2024, 6, 15, 12, 0),
        MockEeprom::new(),
        &settings,
    );
    assert!(rig.poll_after(0).is_some());
    assert!(rig.poll_after(4_999).is_none());
    assert!(rig.poll_after(1).is_some());
}

#[test]
fn any_command_forces_an_immediate_check() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    rig.poll_after(0);
    assert_eq!(rig.poll_after(1_000), None);

    rig.console.send("h");
    assert_eq!(rig.poll_after(1_000), Some(LightingAction::Off));

    // Rejected lines count too.
    rig.console.send("zzz");
    assert_eq!(rig.poll_after(1_000), Some(LightingAction::Off));
}

#[test]
fn lights_follow_the_clock_across_checks() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 23, 0), MockEeprom::new());
    assert_eq!(rig.poll_after(0), Some(LightingAction::On));
    assert_eq!(rig.hw.lights_on(), Some(true));
    assert!(rig.hw.calls.contains(&HwCall::Indicator(true)));

    rig.hw.time = rig.hw.time.map(|t| t + chrono::TimeDelta::hours(7));
    assert_eq!(rig.poll_after(60_000), Some(LightingAction::Off));
    assert_eq!(rig.hw.lights_on(), Some(false));
    assert_eq!(rig.hw.calls.last(), Some(&HwCall::Lighting(false)));
}

// ── Input assembly through the loop ───────────────────────────

#[test]
fn partial_line_waits_for_newline() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    rig.console.input.extend(b"x1");
    rig.poll_after(0);
    assert_eq!(rig.app.config().extra_minutes, 0);

    rig.console.input.extend(b"5\r\n");
    rig.poll_after(10);
    assert_eq!(rig.app.config().extra_minutes, 15);
}

#[test]
fn one_line_per_pass() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    rig.console.input.extend(b"x1\nx2\n");
    rig.poll_after(0);
    assert_eq!(rig.app.config().extra_minutes, 1);
    rig.poll_after(10);
    assert_eq!(rig.app.config().extra_minutes, 2);
}

#[test]
fn cancel_discards_the_pending_line() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    rig.console.take_output();
    rig.console.input.extend(b"x12");
    rig.console.input.push_back(0x08);
    rig.console.send("x5");
    rig.poll_after(0);

    let out = rig.console.take_output();
    assert!(out.starts_with("x12\nInput canceled.\nx5\n"), "got {out:?}");
    assert_eq!(rig.app.config().extra_minutes, 5);
}

#[test]
fn overflow_truncates_and_still_runs_the_command() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new());
    let line = format!("h{}", "a".repeat(39));
    let out = rig.send(&line);

    assert_eq!(out.matches("\nInput overflow.\n").count(), 9);
    assert_eq!(rig.hw.alerts().len(), 9);
    assert!(out.contains(&format!("h{}\n", "a".repeat(30))));
    assert!(out.contains("GardenLights, "));
}
