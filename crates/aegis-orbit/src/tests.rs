//! Tests for orbit propagation and distance conversion.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use proptest::prelude::*;

use aegis_core::types::{OrbitalElements, Position, SceneFrame};

use crate::{distance_km, orbit_path, orbital_period, position};

fn elements(altitude: f64, inclination: f64, raan: f64, phase: f64, speed: f64) -> OrbitalElements {
    OrbitalElements {
        altitude,
        inclination,
        raan,
        phase,
        speed,
    }
}

// ---- Propagator ----

#[test]
fn test_equatorial_orbit_at_epoch_lies_on_x_axis() {
    let frame = SceneFrame::default();
    let p = position(&elements(0.0, 0.0, 0.0, 0.0, 0.001), 0.0, &frame);
    assert_relative_eq!(p.x, 6.378, max_relative = 1e-15);
    assert_eq!(p.y, 0.0);
    assert_eq!(p.z, 0.0);
}

#[test]
fn test_altitude_adds_to_planet_radius() {
    let frame = SceneFrame::default();
    let p = position(&elements(422.0, 0.0, 0.0, 0.0, 0.001), 0.0, &frame);
    assert_relative_eq!(p.x, 6.8, epsilon = 1e-12);
}

#[test]
fn test_polar_orbit_quarter_phase_points_up() {
    let frame = SceneFrame::default();
    let p = position(&elements(0.0, 90.0, 0.0, 90.0, 0.001), 0.0, &frame);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 6.378, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_raan_rotates_node_onto_z() {
    let frame = SceneFrame::default();
    let p = position(&elements(0.0, 0.0, 90.0, 0.0, 0.001), 0.0, &frame);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 6.378, epsilon = 1e-12);
}

#[test]
fn test_equatorial_orbit_never_leaves_plane() {
    let frame = SceneFrame::default();
    let orbit = elements(500.0, 0.0, 33.0, 12.0, 0.0011);
    for t in [0.0, 100.0, 1234.5, 99_999.0] {
        assert_eq!(position(&orbit, t, &frame).y, 0.0);
    }
}

#[test]
fn test_speed_advances_phase() {
    let frame = SceneFrame::default();
    // Quarter revolution after pi/2 / speed seconds.
    let speed = 0.002;
    let t = (TAU / 4.0) / speed;
    let p = position(&elements(0.0, 0.0, 0.0, 0.0, speed), t, &frame);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(p.z, 6.378, epsilon = 1e-9);
}

#[test]
fn test_retrograde_runs_backwards() {
    let frame = SceneFrame::default();
    let prograde = position(&elements(300.0, 20.0, 10.0, 0.0, 0.001), 250.0, &frame);
    let retrograde = position(&elements(300.0, 20.0, 10.0, 0.0, -0.001), -250.0, &frame);
    assert_eq!(prograde, retrograde);
}

#[test]
fn test_stationary_orbit_is_fixed() {
    let frame = SceneFrame::default();
    let orbit = elements(800.0, 45.0, 60.0, 30.0, 0.0);
    let start = position(&orbit, 0.0, &frame);
    assert_eq!(position(&orbit, 1.0e6, &frame), start);
}

#[test]
fn test_custom_frame_scales_radius() {
    let frame = SceneFrame {
        planet_radius_km: 1000.0,
        scene_scale: 0.01,
    };
    let p = position(&elements(500.0, 0.0, 0.0, 0.0, 0.0), 0.0, &frame);
    assert_relative_eq!(p.x, 15.0, epsilon = 1e-12);
}

#[test]
fn test_propagation_is_deterministic() {
    let frame = SceneFrame::default();
    let orbit = elements(417.3, 51.6, 123.4, 287.9, 0.00113);
    let a = position(&orbit, 86_400.25, &frame);
    let b = position(&orbit, 86_400.25, &frame);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.z.to_bits(), b.z.to_bits());
}

// ---- Period & path ----

#[test]
fn test_orbital_period() {
    assert_relative_eq!(
        orbital_period(&elements(0.0, 0.0, 0.0, 0.0, 0.001)).unwrap(),
        TAU * 1000.0,
        max_relative = 1e-12
    );
    assert_eq!(
        orbital_period(&elements(0.0, 0.0, 0.0, 0.0, -0.002)),
        orbital_period(&elements(0.0, 0.0, 0.0, 0.0, 0.002))
    );
    assert!(orbital_period(&elements(0.0, 0.0, 0.0, 0.0, 0.0)).is_none());
}

#[test]
fn test_orbit_path_closes_loop() {
    let frame = SceneFrame::default();
    let orbit = elements(420.0, 51.6, 80.0, 10.0, 0.0011);
    let path = orbit_path(&orbit, 100, &frame);
    assert_eq!(path.len(), 101);
    let (first, last) = (path[0], path[100]);
    assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
    assert_relative_eq!(first.y, last.y, epsilon = 1e-9);
    assert_relative_eq!(first.z, last.z, epsilon = 1e-9);
    assert_eq!(first, position(&orbit, 0.0, &frame));
}

#[test]
fn test_orbit_path_stationary_is_single_point() {
    let frame = SceneFrame::default();
    let path = orbit_path(&elements(100.0, 0.0, 0.0, 0.0, 0.0), 64, &frame);
    assert_eq!(path.len(), 1);
}

#[test]
fn test_orbit_path_zero_samples_still_spans_orbit() {
    let frame = SceneFrame::default();
    let path = orbit_path(&elements(100.0, 0.0, 0.0, 0.0, 0.01), 0, &frame);
    assert_eq!(path.len(), 2);
}

// ---- Distance ----

#[test]
fn test_distance_converts_scene_units_to_km() {
    let frame = SceneFrame::default();
    let d = distance_km(
        &Position::new(0.0, 0.0, 0.0),
        &Position::new(1.5, 0.0, 0.0),
        &frame,
    );
    assert_relative_eq!(d, 1500.0, max_relative = 1e-12);
}

#[test]
fn test_distance_three_axes() {
    let frame = SceneFrame::default();
    let d = distance_km(
        &Position::new(1.0, 2.0, 3.0),
        &Position::new(4.0, 6.0, 3.0),
        &frame,
    );
    assert_relative_eq!(d, 5000.0, max_relative = 1e-12);
}

#[test]
fn test_distance_to_self_is_zero() {
    let frame = SceneFrame::default();
    let p = Position::new(3.2, -1.1, 7.7);
    assert_eq!(distance_km(&p, &p, &frame), 0.0);
}

#[test]
fn test_coincident_orbits_are_zero_apart() {
    let frame = SceneFrame::default();
    let orbit = elements(420.0, 51.6, 0.0, 0.0, 0.0011);
    let a = position(&orbit, 777.0, &frame);
    let b = position(&orbit, 777.0, &frame);
    assert_eq!(distance_km(&a, &b, &frame), 0.0);
}

// ---- Properties ----

fn arb_elements() -> impl Strategy<Value = OrbitalElements> {
    (
        0.0..40_000.0f64,
        -180.0..180.0f64,
        0.0..360.0f64,
        0.0..360.0f64,
        prop_oneof![1.0e-4..1.0e-1f64, -1.0e-1..-1.0e-4f64],
    )
        .prop_map(|(altitude, inclination, raan, phase, speed)| {
            elements(altitude, inclination, raan, phase, speed)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_position_is_periodic(orbit in arb_elements(), t in 0.0..1.0e5f64) {
        let frame = SceneFrame::default();
        let period = orbital_period(&orbit).unwrap();
        let a = position(&orbit, t, &frame);
        let b = position(&orbit, t + period, &frame);
        prop_assert!(distance_km(&a, &b, &frame) < 1.0e-3, "a={a:?} b={b:?}");
    }

    #[test]
    fn prop_position_stays_on_orbit_sphere(orbit in arb_elements(), t in 0.0..1.0e5f64) {
        let frame = SceneFrame::default();
        let r = (frame.planet_radius_km + orbit.altitude) * frame.scene_scale;
        let p = position(&orbit, t, &frame);
        prop_assert!((p.to_dvec3().length() - r).abs() < 1.0e-9 * r.max(1.0));
    }

    #[test]
    fn prop_position_is_finite(orbit in arb_elements(), t in -1.0e6..1.0e6f64) {
        let p = position(&orbit, t, &SceneFrame::default());
        prop_assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn prop_distance_is_symmetric(
        ax in -50.0..50.0f64, ay in -50.0..50.0f64, az in -50.0..50.0f64,
        bx in -50.0..50.0f64, by in -50.0..50.0f64, bz in -50.0..50.0f64,
    ) {
        let frame = SceneFrame::default();
        let a = Position::new(ax, ay, az);
        let b = Position::new(bx, by, bz);
        prop_assert_eq!(distance_km(&a, &b, &frame), distance_km(&b, &a, &frame));
    }
}
