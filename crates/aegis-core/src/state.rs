//! Entity model and the per-tick snapshot handed to render/UI collaborators.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::{AgentState, DebrisState};
use crate::enums::{AgentStatus, DebrisStatus, EntityKind};
use crate::events::SimEvent;
use crate::types::{EntityId, OrbitalElements, Position, SimTime};

/// Kind-specific part of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityBody {
    Asset,
    Agent { state: AgentState },
    Debris { state: DebrisState },
}

/// One simulated object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub orbit: OrbitalElements,
    /// Derived from `orbit` every tick; never a source of truth.
    #[serde(default)]
    pub position: Position,
    pub body: EntityBody,
}

impl Entity {
    pub fn asset(id: impl Into<EntityId>, orbit: OrbitalElements) -> Self {
        Self {
            id: id.into(),
            orbit,
            position: Position::default(),
            body: EntityBody::Asset,
        }
    }

    pub fn agent(id: impl Into<EntityId>, orbit: OrbitalElements, state: AgentState) -> Self {
        Self {
            id: id.into(),
            orbit,
            position: Position::default(),
            body: EntityBody::Agent { state },
        }
    }

    pub fn debris(id: impl Into<EntityId>, orbit: OrbitalElements, state: DebrisState) -> Self {
        Self {
            id: id.into(),
            orbit,
            position: Position::default(),
            body: EntityBody::Debris { state },
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self.body {
            EntityBody::Asset => EntityKind::Asset,
            EntityBody::Agent { .. } => EntityKind::Agent,
            EntityBody::Debris { .. } => EntityKind::Debris,
        }
    }

    pub fn agent_state(&self) -> Option<&AgentState> {
        match &self.body {
            EntityBody::Agent { state } => Some(state),
            _ => None,
        }
    }

    pub fn debris_state(&self) -> Option<&DebrisState> {
        match &self.body {
            EntityBody::Debris { state } => Some(state),
            _ => None,
        }
    }
}

/// An ordered, id-indexed collection of entities.
///
/// Order is the scenario order and is the tie-break order for assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Entity>", into = "Vec<Entity>")]
pub struct EntitySet {
    entities: Vec<Entity>,
    #[serde(skip)]
    index: HashMap<EntityId, usize>,
}

impl EntitySet {
    /// Wrap entities without validating them. See `Scenario::validate`.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        let index = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { entities, index }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    /// The protected asset (the first one, if validation was skipped).
    pub fn asset(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind() == EntityKind::Asset)
    }

    pub fn agents(&self) -> impl Iterator<Item = (&Entity, &AgentState)> {
        self.entities
            .iter()
            .filter_map(|e| e.agent_state().map(|s| (e, s)))
    }

    pub fn debris(&self) -> impl Iterator<Item = (&Entity, &DebrisState)> {
        self.entities
            .iter()
            .filter_map(|e| e.debris_state().map(|s| (e, s)))
    }

    /// Agent → target pairs for every tracking agent (laser links for renderers).
    pub fn tracking_links(&self) -> Vec<TrackingLink> {
        self.agents()
            .filter_map(|(e, s)| {
                s.target().map(|target| TrackingLink {
                    agent: e.id.clone(),
                    target: target.clone(),
                })
            })
            .collect()
    }

    pub fn stats(&self) -> StatsView {
        let mut stats = StatsView::default();
        let mut power_sum = 0.0;
        for (_, state) in self.agents() {
            power_sum += state.power;
            match state.status() {
                AgentStatus::Idle => stats.agents_idle += 1,
                AgentStatus::Tracking => stats.agents_tracking += 1,
                AgentStatus::Recharging => stats.agents_recharging += 1,
            }
        }
        let agent_count = stats.agents_idle + stats.agents_tracking + stats.agents_recharging;
        if agent_count > 0 {
            stats.mean_agent_power = power_sum / agent_count as f64;
        }
        for (_, state) in self.debris() {
            match state.status() {
                DebrisStatus::Safe => stats.debris_safe += 1,
                DebrisStatus::Threat => stats.threats_active += 1,
                DebrisStatus::Neutralized => stats.neutralized += 1,
            }
        }
        stats
    }
}

impl From<Vec<Entity>> for EntitySet {
    fn from(entities: Vec<Entity>) -> Self {
        Self::from_entities(entities)
    }
}

impl From<EntitySet> for Vec<Entity> {
    fn from(set: EntitySet) -> Self {
        set.entities
    }
}

/// A tracking agent and the debris it is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingLink {
    pub agent: EntityId,
    pub target: EntityId,
}

/// Aggregate counts for the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    pub threats_active: u32,
    pub neutralized: u32,
    pub debris_safe: u32,
    pub agents_idle: u32,
    pub agents_tracking: u32,
    pub agents_recharging: u32,
    pub mean_agent_power: f64,
}

/// Complete simulation state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub speed: f64,
    pub entities: EntitySet,
    pub links: Vec<TrackingLink>,
    pub events: Vec<SimEvent>,
    pub stats: StatsView,
}
