//! Assignment system: greedy nearest-agent claiming.
//!
//! Unclaimed threats are resolved one at a time in scenario order. Each claim
//! is recorded in `claimed` before the next threat is considered, so an agent
//! can be handed at most one threat per tick and a threat at most one agent.
//! Distance ties go to the agent that comes first in scenario order.

use std::collections::HashSet;

use aegis_core::components::{AgentActivity, AgentState, DebrisState};
use aegis_core::events::SimEvent;
use aegis_core::state::{Entity, EntitySet};
use aegis_core::types::EntityId;

use super::TickContext;
use crate::pending::PendingUpdates;

pub fn run(
    snapshot: &EntitySet,
    ctx: &TickContext,
    pending: &mut PendingUpdates,
    events: &mut Vec<SimEvent>,
) {
    let mut claimed: HashSet<EntityId> = HashSet::new();

    for (debris, _) in snapshot.debris() {
        let Some(DebrisState::Threat {
            claimed_by: None,
            progress,
        }) = pending.debris_state(debris)
        else {
            continue;
        };

        let Some((agent, state, distance_km)) = nearest_eligible(snapshot, debris, ctx, pending, &claimed)
        else {
            continue;
        };

        claimed.insert(agent.id.clone());
        pending.set_agent(
            &agent.id,
            AgentState {
                power: state.power,
                activity: AgentActivity::Tracking {
                    target: debris.id.clone(),
                },
            },
        );
        pending.set_debris(
            &debris.id,
            DebrisState::Threat {
                claimed_by: Some(agent.id.clone()),
                progress,
            },
        );
        events.push(SimEvent::ThreatLocked {
            debris: debris.id.clone(),
            agent: agent.id.clone(),
            distance_km,
        });
    }
}

/// Closest idle agent with enough power that nothing claimed this tick.
fn nearest_eligible<'s>(
    snapshot: &'s EntitySet,
    debris: &Entity,
    ctx: &TickContext,
    pending: &PendingUpdates,
    claimed: &HashSet<EntityId>,
) -> Option<(&'s Entity, AgentState, f64)> {
    let debris_pos = pending.position(debris);
    let mut best: Option<(&Entity, AgentState, f64)> = None;

    for (agent, _) in snapshot.agents() {
        if claimed.contains(&agent.id) {
            continue;
        }
        let Some(state) = pending.agent_state(agent) else {
            continue;
        };
        if state.activity != AgentActivity::Idle || state.power <= ctx.config.min_engagement_power {
            continue;
        }
        let distance = aegis_orbit::distance_km(&pending.position(agent), &debris_pos, &ctx.frame);
        // Strict `<` keeps the earlier agent on ties.
        if best.as_ref().map_or(true, |(_, _, d)| distance < *d) {
            best = Some((agent, state, distance));
        }
    }
    best
}
