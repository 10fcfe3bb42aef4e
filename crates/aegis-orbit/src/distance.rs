//! Scene-space to real-world distance conversion.

use aegis_core::types::{Position, SceneFrame};

/// Real-world distance (km) between two scene positions.
pub fn distance_km(a: &Position, b: &Position, frame: &SceneFrame) -> f64 {
    a.range_to(b) * (1.0 / frame.scene_scale)
}
