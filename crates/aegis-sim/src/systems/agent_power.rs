//! Agent power state machine and neutralization progress.
//!
//! Idle agents regenerate slowly. Tracking agents drain power and push their
//! target toward neutralization. Recharging agents do nothing but recharge
//! until full. Power is clamped to [0, MAX_POWER] on every update.
//!
//! Power rates run on `delta × (speed / reference_speed)`; neutralization
//! progress runs on the raw frame delta.

use aegis_core::components::{AgentActivity, AgentState, DebrisState};
use aegis_core::constants::{MAX_POWER, MAX_PROGRESS};
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
    let scale = ctx.power_scale();

    for (agent, _) in snapshot.agents() {
        let Some(state) = pending.agent_state(agent) else {
            continue;
        };

        let next = match &state.activity {
            AgentActivity::Recharging => {
                let power = state.power + ctx.config.recharge_rate * ctx.delta * scale;
                if power >= MAX_POWER {
                    events.push(SimEvent::Recharged {
                        agent: agent.id.clone(),
                    });
                    AgentState::idle(MAX_POWER)
                } else {
                    AgentState {
                        power,
                        activity: AgentActivity::Recharging,
                    }
                }
            }
            AgentActivity::Tracking { target } => {
                track(snapshot, agent, &state, target, ctx, scale, pending, events)
            }
            AgentActivity::Idle => {
                let power = state.power + ctx.config.idle_recharge_rate * ctx.delta * scale;
                AgentState::idle(power.min(MAX_POWER))
            }
        };

        if next != state {
            pending.set_agent(&agent.id, next);
        }
    }
}

/// One tick of tracking: drain, then either deplete or advance the target.
#[allow(clippy::too_many_arguments)]
fn track(
    snapshot: &EntitySet,
    agent: &Entity,
    state: &AgentState,
    target: &EntityId,
    ctx: &TickContext,
    scale: f64,
    pending: &mut PendingUpdates,
    events: &mut Vec<SimEvent>,
) -> AgentState {
    let target_state = snapshot
        .get(target)
        .and_then(|debris| pending.debris_state(debris));

    // A target that is no longer a threat held by this agent cannot be worked on.
    let progress = match target_state {
        Some(DebrisState::Threat {
            claimed_by: Some(ref holder),
            progress,
        }) if holder == &agent.id => progress,
        _ => {
            tracing::debug!(agent = %agent.id, %target, "target lost, returning to idle");
            return AgentState::idle(state.power);
        }
    };

    let power = state.power - ctx.config.drain_rate * ctx.delta * scale;
    if power <= 0.0 {
        pending.set_debris(
            target,
            DebrisState::Threat {
                claimed_by: None,
                progress,
            },
        );
        tracing::warn!(agent = %agent.id, released = %target, "battery depleted");
        events.push(SimEvent::BatteryDepleted {
            agent: agent.id.clone(),
            released: target.clone(),
        });
        return AgentState {
            power: 0.0,
            activity: AgentActivity::Recharging,
        };
    }

    let progress = (progress + ctx.config.neutralization_rate * ctx.delta).min(MAX_PROGRESS);
    if progress >= MAX_PROGRESS {
        pending.set_debris(target, DebrisState::Neutralized);
        events.push(SimEvent::TargetNeutralized {
            debris: target.clone(),
            agent: agent.id.clone(),
        });
        return AgentState::idle(power);
    }

    pending.set_debris(
        target,
        DebrisState::Threat {
            claimed_by: Some(agent.id.clone()),
            progress,
        },
    );
    AgentState {
        power,
        activity: AgentActivity::Tracking {
            target: target.clone(),
        },
    }
}
