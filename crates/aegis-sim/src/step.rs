//! Scenario initialization and the pure tick step.

use aegis_core::config::SimConfig;
use aegis_core::error::ScenarioError;
use aegis_core::events::SimEvent;
use aegis_core::scenario::Scenario;
use aegis_core::state::EntitySet;

use crate::clock::{sanitize_delta, sanitize_speed};
use crate::pending::PendingUpdates;
use crate::registry::Registry;
use crate::systems::{self, TickContext};

/// Inputs to one pure tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Simulated time before this tick (seconds).
    pub simulated_time: f64,
    /// Real-time frame delta (seconds).
    pub delta: f64,
    pub speed_multiplier: f64,
    pub running: bool,
}

/// Result of one pure tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub entities: EntitySet,
    pub simulated_time: f64,
    pub events: Vec<SimEvent>,
}

/// Validate `config` and `scenario`, and place every entity at t = 0.
pub fn initialize(scenario: Scenario, config: &SimConfig) -> Result<EntitySet, ScenarioError> {
    config.validate()?;
    let entities = scenario.into_entity_set()?;

    let mut registry = Registry::from_entity_set(&entities);
    let mut pending = PendingUpdates::new();
    systems::propagation::run(&entities, 0.0, &config.scene_frame(), &mut pending);
    registry.apply(pending);

    tracing::info!(entities = registry.len(), "scenario initialized");
    Ok(registry.snapshot())
}

/// Advance `entities` by one frame without touching any shared state.
///
/// A paused tick returns its inputs unchanged. A running tick moves simulated
/// time to `simulated_time + delta × speed_multiplier` and runs every system
/// against that time. Negative or non-finite `delta`/`speed_multiplier` count
/// as zero.
pub fn tick(entities: &EntitySet, input: TickInput, config: &SimConfig) -> TickOutcome {
    if !input.running {
        return TickOutcome {
            entities: entities.clone(),
            simulated_time: input.simulated_time,
            events: Vec::new(),
        };
    }

    let delta = sanitize_delta(input.delta);
    let speed = sanitize_speed(input.speed_multiplier);
    let simulated_time = input.simulated_time + delta * speed;

    let mut registry = Registry::from_entity_set(entities);
    let ctx = TickContext::new(simulated_time, delta, speed, config);
    let events = run_systems(&mut registry, &ctx);

    TickOutcome {
        entities: registry.snapshot(),
        simulated_time,
        events,
    }
}

/// Read one snapshot, run every system against it, commit once.
pub(crate) fn run_systems(registry: &mut Registry, ctx: &TickContext) -> Vec<SimEvent> {
    let snapshot = registry.snapshot();
    let mut pending = PendingUpdates::new();
    let mut events = Vec::new();

    // 1. Propagation
    systems::propagation::run(&snapshot, ctx.time_secs, &ctx.frame, &mut pending);
    // 2. Threat detection
    systems::threat_detection::run(&snapshot, ctx, &mut pending, &mut events);
    // 3. Assignment
    systems::assignment::run(&snapshot, ctx, &mut pending, &mut events);
    // 4. Agent power / neutralization
    systems::agent_power::run(&snapshot, ctx, &mut pending, &mut events);

    registry.apply(pending);
    events
}
