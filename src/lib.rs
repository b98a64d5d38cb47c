//! GardenLights controller library.
//!
//! Switches garden lighting from a static sunrise/sunset table, adjusted by a
//! persisted fixed off time and extra-minutes margin, under a thermal guard.
//! The decision core is pure; hardware sits behind the port traits in
//! [`app::ports`], with host adapters in [`adapters`] and [`drivers`].

#![deny(unused_must_use)]

pub mod app;
pub mod astro;
pub mod calendar;
pub mod config;
pub mod error;
pub mod input;
pub mod policy;
pub mod safety;
pub mod scheduler;

pub mod adapters;
pub mod drivers;
