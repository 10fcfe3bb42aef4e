//! Simulation engine for AEGIS.
//!
//! Owns the hecs-backed entity registry, runs the tick systems in a fixed
//! order against one snapshot per tick, and produces `SimSnapshot`s for
//! render/UI collaborators. `tick` is also exposed as a pure function.

pub mod clock;
pub mod engine;
pub mod pending;
pub mod registry;
pub mod step;
pub mod systems;

pub use aegis_core as core;
pub use engine::SimulationEngine;
pub use step::{initialize, tick, TickInput, TickOutcome};
