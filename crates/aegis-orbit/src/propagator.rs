//! Circular-orbit propagator.
//!
//! The 3D placement follows the scene's visualization convention: RAAN rotates
//! the plane about the vertical axis and inclination tilts the in-plane Y
//! component onto scene Y. This is not a textbook astrodynamics frame and must
//! not be changed; positions are compared bit-for-bit in replays.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use aegis_core::types::{OrbitalElements, Position, SceneFrame};

/// Scene-space position of an orbit at `time_secs` of simulated time.
///
/// Terms are evaluated in a fixed order; the result is bit-reproducible on any
/// platform with IEEE-754 doubles and the same libm.
pub fn position(elements: &OrbitalElements, time_secs: f64, frame: &SceneFrame) -> Position {
    let angle = deg_to_rad(elements.phase) + elements.speed * time_secs;
    let r = (frame.planet_radius_km + elements.altitude) * frame.scene_scale;

    let i = deg_to_rad(elements.inclination);
    let omega = deg_to_rad(elements.raan);

    let x_orb = r * angle.cos();
    let y_orb = r * angle.sin();

    let x = x_orb * omega.cos() - y_orb * i.cos() * omega.sin();
    let z = x_orb * omega.sin() + y_orb * i.cos() * omega.cos();
    let y = y_orb * i.sin();

    DVec3::new(x, y, z).into()
}

/// `(deg * PI) / 180`, kept in this order rather than `f64::to_radians`.
fn deg_to_rad(deg: f64) -> f64 {
    (deg * PI) / 180.0
}

/// Time for one revolution, or `None` for a stationary orbit.
pub fn orbital_period(elements: &OrbitalElements) -> Option<f64> {
    if elements.speed == 0.0 {
        None
    } else {
        Some(TAU / elements.speed.abs())
    }
}

/// `samples + 1` positions spanning one full revolution from t = 0, closing the loop.
///
/// Stationary orbits yield their single fixed point.
pub fn orbit_path(elements: &OrbitalElements, samples: usize, frame: &SceneFrame) -> Vec<Position> {
    let Some(period) = orbital_period(elements) else {
        return vec![position(elements, 0.0, frame)];
    };
    let samples = samples.max(1);
    (0..=samples)
        .map(|k| {
            let t = (k as f64 / samples as f64) * period;
            position(elements, t, frame)
        })
        .collect()
}
