//! Simulation engine.
//!
//! `SimulationEngine` owns the registry and the clock, processes queued
//! control commands at the tick boundary, runs all systems, and produces
//! `SimSnapshot`s. Headless and deterministic: the same scenario, config and
//! sequence of frame deltas always yields the same snapshots.

use std::collections::VecDeque;

use hecs::World;

use aegis_core::commands::ControlCommand;
use aegis_core::config::SimConfig;
use aegis_core::constants::ORBIT_PATH_SAMPLES;
use aegis_core::error::ScenarioError;
use aegis_core::scenario::Scenario;
use aegis_core::state::{EntitySet, SimSnapshot};
use aegis_core::types::{EntityId, Position, SimTime};

use crate::clock::{sanitize_delta, SimClock};
use crate::registry::Registry;
use crate::step::{self, initialize};
use crate::systems::{self, TickContext};

pub struct SimulationEngine {
    registry: Registry,
    clock: SimClock,
    config: SimConfig,
    command_queue: VecDeque<ControlCommand>,
}

impl SimulationEngine {
    /// Validate the scenario and config and place every entity at t = 0.
    pub fn new(config: SimConfig, scenario: Scenario) -> Result<Self, ScenarioError> {
        let entities = initialize(scenario, &config)?;
        Ok(Self {
            registry: Registry::from_entity_set(&entities),
            clock: SimClock::new(config.default_speed),
            config,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one frame of `delta` real seconds and return the new snapshot.
    pub fn tick(&mut self, delta: f64) -> SimSnapshot {
        self.process_commands();

        let mut events = Vec::new();
        if self.clock.advance(delta).is_some() {
            let ctx = TickContext::new(
                self.clock.elapsed_secs(),
                sanitize_delta(delta),
                self.clock.speed(),
                &self.config,
            );
            events = step::run_systems(&mut self.registry, &ctx);

            tracing::trace!(
                tick = self.clock.time().tick,
                elapsed_secs = self.clock.elapsed_secs(),
                events = events.len(),
                "tick"
            );
            for event in &events {
                tracing::debug!(level = ?event.level(), "{event}");
            }
        }

        systems::snapshot::build_snapshot(&self.registry, &self.clock, events)
    }

    /// Current state without advancing. Carries no events.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.registry, &self.clock, Vec::new())
    }

    pub fn entities(&self) -> EntitySet {
        self.registry.snapshot()
    }

    pub fn time(&self) -> SimTime {
        self.clock.time()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn speed(&self) -> f64 {
        self.clock.speed()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        self.registry.world()
    }

    /// Sampled orbit line for one entity, for renderers.
    pub fn orbit_path(&self, id: &EntityId) -> Option<Vec<Position>> {
        let orbit = self.registry.orbit(id)?;
        Some(aegis_orbit::orbit_path(
            &orbit,
            ORBIT_PATH_SAMPLES,
            &self.config.scene_frame(),
        ))
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: ControlCommand) {
        tracing::debug!(?command, "control command");
        match command {
            ControlCommand::Pause => self.clock.pause(),
            ControlCommand::Resume => self.clock.resume(),
            ControlCommand::TogglePlay => self.clock.toggle(),
            ControlCommand::SetSpeed { multiplier } => self.clock.set_speed(multiplier),
        }
    }
}
