//! Snapshot system: builds the `SimSnapshot` handed to render/UI collaborators.
//!
//! Read-only; never modifies the registry.

use aegis_core::events::SimEvent;
use aegis_core::state::SimSnapshot;

use crate::clock::SimClock;
use crate::registry::Registry;

pub fn build_snapshot(registry: &Registry, clock: &SimClock, events: Vec<SimEvent>) -> SimSnapshot {
    let entities = registry.snapshot();
    SimSnapshot {
        time: clock.time(),
        running: clock.is_running(),
        speed: clock.speed(),
        links: entities.tracking_links(),
        stats: entities.stats(),
        entities,
        events,
    }
}
