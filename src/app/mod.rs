//! Application core: pure domain logic, zero I/O.
//!
//! This module holds the operator-facing behaviour of the GardenLights
//! controller: the command protocol and the service loop that ties commands,
//! persisted settings and the lights check together.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod commands;
pub mod ports;
pub mod service;
