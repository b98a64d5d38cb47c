//! Command protocol over the serial line: validation, persistence and the
//! replies an operator sees.

use gardenlights::app::ports::ClockPort;
use gardenlights::config::LightingConfig;

use crate::mock_hw::{MockEeprom, MockHardware, Rig};

fn daytime_rig() -> Rig {
    Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::new())
}

/// Output minus the echoed command and the trailing lights report.
fn reply(out: &str) -> &str {
    let body = out.split_once('\n').map_or("", |(_, rest)| rest);
    body.strip_suffix("Lights off.\n")
        .or_else(|| body.strip_suffix("Lights on.\n"))
        .unwrap_or(body)
}

// ── Rejections ────────────────────────────────────────────────

#[test]
fn malformed_lines_get_bad_input_and_change_nothing() {
    for line in [
        "",
        "q",
        "i20230231",
        "i2024061",
        "t2024061514300",
        "t20240615250000",
        "f0",
        "f256",
        "f9999",
        "f12345",
        "x256",
        "xabc",
    ] {
        let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::with([90, 10]));
        let before = *rig.app.config();
        let out = rig.send(line);
        assert_eq!(reply(&out), "Bad input.\n", "line {line:?}");
        assert_eq!(*rig.app.config(), before, "line {line:?}");
        assert!(rig.eeprom.writes.is_empty(), "line {line:?}");
    }
}

#[test]
fn clock_check_precedes_date_validation() {
    let mut rig = Rig::new(MockHardware::new(), MockEeprom::new());
    let out = rig.send("i20230231");
    assert!(out.contains("Time has not been set.\n"));
    assert!(!out.contains("Bad input."));

    // Wrong length is rejected whatever the clock says.
    let out = rig.send("i2024061");
    assert!(out.contains("Bad input.\n"));
    assert!(!out.contains("Time has not been set.\n"));

    rig.hw.time = MockHardware::at(2024, 6, 15, 12, 0).time;
    let out = rig.send("i20230231");
    assert!(out.contains("Bad input.\n"));
}

#[test]
fn leap_day_is_accepted_for_info_but_not_for_setting_time() {
    let mut rig = daytime_rig();
    let out = rig.send("i20230229");
    assert!(out.contains("For     2023-02-29\n"), "got {out:?}");
    assert!(out.contains("Sunrise 07:27\n"));

    let out = rig.send("t20230229120000");
    assert_eq!(reply(&out), "Bad input.\n");

    let out = rig.send("t20240229120000");
    assert!(out.contains("It is 2024-02-29 12:00:00\n"));
}

// ── Fixed off time ────────────────────────────────────────────

#[test]
fn fixed_off_time_is_persisted_and_reported() {
    let mut rig = daytime_rig();
    let out = rig.send("f90");
    assert_eq!(reply(&out), "Fixed off time set to 01:30\n");
    assert_eq!(rig.eeprom.bytes[0], 90);

    let out = rig.send("i");
    assert!(out.contains("Fixed off time set to 01:30\n"));
    assert!(out.contains("Lights Off 01:30\n"));
    assert!(out.contains("Lights On  21:02\n"));
}

#[test]
fn fixed_off_time_255_disables_the_override() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::with([90, 0]));
    assert_eq!(rig.app.config().fixed_off_time, Some(90));

    let out = rig.send("f255");
    assert_eq!(reply(&out), "Fixed off time set to 'disabled'.\n");
    assert_eq!(rig.app.config().fixed_off_time, None);
    assert_eq!(rig.eeprom.bytes[0], 0xFF);
}

#[test]
fn fixed_off_time_switches_lights_off_after_midnight() {
    let mut rig = Rig::new(MockHardware::at(2024, 6, 15, 2, 0), MockEeprom::new());
    rig.poll_after(0);
    assert_eq!(rig.hw.lights_on(), Some(true));

    let out = rig.send("f60");
    assert!(out.ends_with("Lights off.\n"));
    assert_eq!(rig.hw.lights_on(), Some(false));
}

// ── Extra minutes ─────────────────────────────────────────────

#[test]
fn extra_minutes_shift_both_edges() {
    let mut rig = daytime_rig();
    let out = rig.send("x0030");
    assert_eq!(reply(&out), "Extra minutes 30\n");
    assert_eq!(rig.eeprom.bytes[1], 30);

    let out = rig.send("i");
    assert!(out.contains("Lights Off 04:48\n"));
    assert!(out.contains("Lights On  20:32\n"));
}

#[test]
fn settings_survive_a_restart() {
    let mut rig = daytime_rig();
    rig.send("f120");
    rig.send("x15");

    let eeprom = MockEeprom::with(rig.eeprom.bytes);
    assert_eq!(
        LightingConfig::load(&eeprom),
        LightingConfig {
            fixed_off_time: Some(120),
            extra_minutes: 15,
        }
    );

    let mut restarted = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), eeprom);
    let out = restarted.send("i");
    assert!(out.contains("Fixed off time set to 02:00\n"));
    assert!(out.contains("Extra minutes 15\n"));
}

#[test]
fn never_written_eeprom_loads_as_erased() {
    let rig = Rig::new(MockHardware::at(2024, 6, 15, 12, 0), MockEeprom::erased());
    assert_eq!(rig.app.config().fixed_off_time, None);
    assert_eq!(rig.app.config().extra_minutes, 255);
}

#[test]
fn failed_persistence_keeps_the_new_value_in_memory() {
    let mut rig = daytime_rig();
    rig.eeprom.fail_writes = true;
    let out = rig.send("x20");
    assert_eq!(reply(&out), "Extra minutes 20\n");
    assert_eq!(rig.app.config().extra_minutes, 20);
    assert_eq!(rig.eeprom.bytes[1], 0);
}

// ── Setting the clock ─────────────────────────────────────────

#[test]
fn rtc_write_failure_is_reported_but_time_is_taken() {
    let mut hw = MockHardware::new();
    hw.rtc_fault = Some(3);
    let mut rig = Rig::new(hw, MockEeprom::new());

    let out = rig.send("t20240615143000");
    assert!(out.contains("Failed to set RTC: 3\n"), "got {out:?}");
    assert!(out.contains("It is 2024-06-15 14:30:00\n"));
    assert!(rig.hw.is_time_set());
}

#[test]
fn dead_rtc_leaves_the_clock_unset() {
    let mut hw = MockHardware::new();
    hw.rtc_dead = true;
    let mut rig = Rig::new(hw, MockEeprom::new());

    let out = rig.send("t20240615143000");
    assert!(out.contains("Failed to set RTC: RTC not responding\n"));
    assert!(out.contains("Failed to set time.\n"));
    assert!(!rig.hw.is_time_set());
}

#[test]
fn help_is_available_any_time() {
    let mut rig = Rig::new(MockHardware::new(), MockEeprom::new());
    let out = rig.send("h");
    assert!(out.contains("i[yyyyMMdd]: Date info.\n"));
    assert!(out.contains("x[mmm]: Extra minutes.\n"));
}
