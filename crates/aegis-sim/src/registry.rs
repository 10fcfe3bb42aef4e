//! Entity registry: the authoritative store of entity state.
//!
//! Backed by a hecs `World`. Systems never touch the world directly; they
//! read an `EntitySet` snapshot and propose changes through `PendingUpdates`,
//! which the registry commits in one pass at the end of the tick.

use std::collections::HashMap;

use hecs::World;

use aegis_core::components::{Agent, AgentState, Asset, Debris, DebrisState};
use aegis_core::state::{Entity, EntityBody, EntitySet};
use aegis_core::types::{EntityId, OrbitalElements, Position};

use crate::pending::PendingUpdates;

pub struct Registry {
    world: World,
    /// Spawn handles in scenario order. Snapshots iterate this, never the world.
    order: Vec<hecs::Entity>,
    index: HashMap<EntityId, hecs::Entity>,
}

impl Registry {
    /// Spawn every entity of `set` into a fresh world, preserving its order.
    pub fn from_entity_set(set: &EntitySet) -> Self {
        let mut world = World::new();
        let mut order = Vec::with_capacity(set.len());
        let mut index = HashMap::with_capacity(set.len());

        for entity in set.iter() {
            let handle = spawn_entity(&mut world, entity);
            order.push(handle);
            index.insert(entity.id.clone(), handle);
        }

        Self {
            world,
            order,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Read-only access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Orbital elements of one entity.
    pub fn orbit(&self, id: &EntityId) -> Option<OrbitalElements> {
        let &handle = self.index.get(id)?;
        let orbit = *self.world.get::<&OrbitalElements>(handle).ok()?;
        Some(orbit)
    }

    /// Consistent copy of every entity, in scenario order.
    pub fn snapshot(&self) -> EntitySet {
        let entities = self
            .order
            .iter()
            .filter_map(|&handle| read_entity(&self.world, handle))
            .collect();
        EntitySet::from_entities(entities)
    }

    /// Commit a resolved batch. Updates for unknown ids are ignored.
    pub fn apply(&mut self, updates: PendingUpdates) {
        for (id, update) in updates.into_updates() {
            let Some(&handle) = self.index.get(&id) else {
                tracing::warn!(%id, "dropping update for unknown entity");
                continue;
            };
            if let Some(position) = update.position {
                if let Ok(mut current) = self.world.get::<&mut Position>(handle) {
                    *current = position;
                }
            }
            if let Some(agent) = update.agent {
                if let Ok(mut current) = self.world.get::<&mut AgentState>(handle) {
                    *current = agent;
                }
            }
            if let Some(debris) = update.debris {
                if let Ok(mut current) = self.world.get::<&mut DebrisState>(handle) {
                    *current = debris;
                }
            }
        }
    }
}

/// Spawn one entity with its kind marker and kind-specific component.
fn spawn_entity(world: &mut World, entity: &Entity) -> hecs::Entity {
    let id = entity.id.clone();
    match &entity.body {
        EntityBody::Asset => world.spawn((id, entity.orbit, entity.position, Asset)),
        EntityBody::Agent { state } => {
            world.spawn((id, entity.orbit, entity.position, Agent, state.clone()))
        }
        EntityBody::Debris { state } => {
            world.spawn((id, entity.orbit, entity.position, Debris, state.clone()))
        }
    }
}

fn read_entity(world: &World, handle: hecs::Entity) -> Option<Entity> {
    let id = EntityId::clone(&*world.get::<&EntityId>(handle).ok()?);
    let orbit = *world.get::<&OrbitalElements>(handle).ok()?;
    let position = *world.get::<&Position>(handle).ok()?;

    let body = if let Ok(state) = world.get::<&AgentState>(handle) {
        EntityBody::Agent {
            state: AgentState::clone(&state),
        }
    } else if let Ok(state) = world.get::<&DebrisState>(handle) {
        EntityBody::Debris {
            state: DebrisState::clone(&state),
        }
    } else {
        EntityBody::Asset
    };

    Some(Entity {
        id,
        orbit,
        position,
        body,
    })
}
