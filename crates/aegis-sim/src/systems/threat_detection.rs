//! Threat detection system.
//!
//! Escalates Safe debris inside the threat range of the asset. Escalation is
//! one-way: a threat that drifts back out of range stays a threat.

use aegis_core::components::DebrisState;
use aegis_core::events::SimEvent;
use aegis_core::state::EntitySet;

use super::TickContext;
use crate::pending::PendingUpdates;

pub fn run(
    snapshot: &EntitySet,
    ctx: &TickContext,
    pending: &mut PendingUpdates,
    events: &mut Vec<SimEvent>,
) {
    let Some(asset) = snapshot.asset() else {
        return;
    };
    let asset_pos = pending.position(asset);

    for (debris, _) in snapshot.debris() {
        if !matches!(pending.debris_state(debris), Some(DebrisState::Safe)) {
            continue;
        }
        let distance_km = aegis_orbit::distance_km(&asset_pos, &pending.position(debris), &ctx.frame);
        if distance_km < ctx.config.threat_range_km {
            pending.set_debris(&debris.id, DebrisState::new_threat());
            events.push(SimEvent::ThreatDetected {
                debris: debris.id.clone(),
                distance_km,
            });
        }
    }
}
