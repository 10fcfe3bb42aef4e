//! Propagation system: fresh positions for every entity from its orbit.

use aegis_core::state::EntitySet;
use aegis_core::types::SceneFrame;

use crate::pending::PendingUpdates;

/// Propose a position for every entity at `time_secs`, neutralized debris included.
pub fn run(snapshot: &EntitySet, time_secs: f64, frame: &SceneFrame, pending: &mut PendingUpdates) {
    for entity in snapshot.iter() {
        let position = aegis_orbit::position(&entity.orbit, time_secs, frame);
        pending.set_position(&entity.id, position);
    }
}
