//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_KM, SCALE_FACTOR};

/// Unique, immutable identifier of a simulated object (e.g. `ISS-ALPHA`, `SWARM-01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 3D position in scene space (scene units, Y is the inclination-tilt axis).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Straight-line distance to another position, in scene units.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Circular-orbit elements. Immutable per entity after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Altitude above the planet surface (km, >= 0).
    pub altitude: f64,
    /// Orbital plane tilt (degrees).
    pub inclination: f64,
    /// Right ascension of the ascending node (degrees).
    pub raan: f64,
    /// Phase angle at t = 0 (degrees).
    pub phase: f64,
    /// Angular speed (radians per simulated second). Negative is retrograde, zero is stationary.
    pub speed: f64,
}

impl OrbitalElements {
    /// Whether every element is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.altitude,
            self.inclination,
            self.raan,
            self.phase,
            self.speed,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Planet and scene-scale parameters the propagator places orbits in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    /// Planet radius (km).
    pub planet_radius_km: f64,
    /// Scene units per km.
    pub scene_scale: f64,
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self {
            planet_radius_km: EARTH_RADIUS_KM,
            scene_scale: SCALE_FACTOR,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that advanced simulated time.
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick covering `step_secs` of simulated time.
    pub fn advance(&mut self, step_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += step_secs;
    }
}
