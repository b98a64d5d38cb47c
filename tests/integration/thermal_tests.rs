//! Thermal guard behaviour as seen through the service loop.

use gardenlights::app::ports::{Alert, Urgency};
use gardenlights::config::ControllerSettings;
use gardenlights::safety::ThermalThresholds;
use gardenlights::scheduler::LightingAction;

use crate::mock_hw::{HwCall, MockEeprom, MockHardware, Rig};

/// Night-time rig, so an allowed check always turns the lights on.
fn night_rig() -> Rig {
    Rig::new(MockHardware::at(2024, 6, 15, 23, 30), MockEeprom::new())
}

fn check(rig: &mut Rig, temperature_c: i16) -> Option<LightingAction> {
    rig.hw.temperature_c = temperature_c;
    rig.hw.calls.clear();
    rig.poll_after(60_000)
}

#[test]
fn shutdown_forces_off_and_latches() {
    let mut rig = night_rig();
    assert_eq!(check(&mut rig, 25), Some(LightingAction::On));

    assert_eq!(check(&mut rig, 80), Some(LightingAction::Skipped));
    assert_eq!(
        rig.hw.calls,
        vec![
            HwCall::Indicator(false),
            HwCall::Lighting(false),
            HwCall::Alert(Alert::Thermal {
                urgency: Urgency::High,
                repeat: 6
            }),
        ]
    );
    assert!(rig.app.is_cooling());
}

#[test]
fn cooling_holds_through_the_warm_bands() {
    let mut rig = night_rig();
    check(&mut rig, 85);

    assert_eq!(check(&mut rig, 75), Some(LightingAction::Skipped));
    assert_eq!(rig.hw.lighting_writes(), 0);
    assert_eq!(
        rig.hw.alerts(),
        vec![Alert::Thermal {
            urgency: Urgency::Medium,
            repeat: 4
        }]
    );

    assert_eq!(check(&mut rig, 55), Some(LightingAction::Skipped));
    assert_eq!(rig.hw.lighting_writes(), 0);

    assert_eq!(check(&mut rig, 49), Some(LightingAction::On));
    assert!(!rig.app.is_cooling());
    assert!(rig.hw.alerts().is_empty());
}

#[test]
fn warm_without_prior_shutdown_still_lights() {
    let mut rig = night_rig();
    assert_eq!(check(&mut rig, 60), Some(LightingAction::On));
    assert_eq!(
        rig.hw.alerts(),
        vec![Alert::Thermal {
            urgency: Urgency::Low,
            repeat: 2
        }]
    );
    assert_eq!(check(&mut rig, 72), Some(LightingAction::On));
    assert_eq!(rig.hw.lights_on(), Some(true));
}

#[test]
fn shutdown_applies_even_with_clock_unset() {
    let mut rig = Rig::new(MockHardware::new(), MockEeprom::new());
    assert_eq!(check(&mut rig, 90), Some(LightingAction::Skipped));
    assert_eq!(rig.hw.lights_on(), Some(false));
    assert!(!rig.hw.alerts().contains(&Alert::TimeNotSet));
}

#[test]
fn info_reports_the_current_temperature() {
    let mut rig = night_rig();
    rig.hw.temperature_c = -3;
    let out = rig.send("i");
    assert!(out.contains("Temp -3 C\n"));
}

#[test]
fn thresholds_come_from_settings() {
    let settings = ControllerSettings {
        thermal: ThermalThresholds {
            warn_c: 30,
            critical_c: 40,
            shutdown_c: 45,
        },
        ..ControllerSettings::default()
    };
    let mut rig = Rig::with_settings(
        MockHardware::at(2024, 6, 15, 23, 30),
        MockEeprom::new(),
        &settings,
    );
    assert_eq!(check(&mut rig, 46), Some(LightingAction::Skipped));
    assert!(rig.app.is_cooling());
    assert_eq!(check(&mut rig, 29), Some(LightingAction::On));
}
