//! Orbit propagation and distance utilities for AEGIS.
//!
//! Pure functions over plain data: same inputs always give the same output.
//! No ECS dependency.

pub mod distance;
pub mod propagator;

pub use distance::distance_km;
pub use propagator::{orbit_path, orbital_period, position};

#[cfg(test)]
mod tests;
