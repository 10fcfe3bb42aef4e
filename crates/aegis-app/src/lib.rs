//! AEGIS headless driver.
//!
//! Loads a scenario and config from JSON, runs the simulation engine on a
//! worker thread at a fixed frame delta, and forwards events and snapshots
//! back to the caller.

pub mod cli;
pub mod console;
pub mod error;
pub mod game_loop;
pub mod loader;
pub mod state;
pub mod telemetry;

pub use aegis_core as core;
