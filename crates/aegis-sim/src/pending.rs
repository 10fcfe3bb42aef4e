//! Per-tick pending-update batch.
//!
//! Systems write here instead of into the registry. Later systems in the same
//! tick read the "effective" state: the pending value if one exists, the
//! snapshot value otherwise.

use std::collections::HashMap;

use aegis_core::components::{AgentState, DebrisState};
use aegis_core::state::Entity;
use aegis_core::types::{EntityId, Position};

/// Partial update for one entity. `None` fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityUpdate {
    pub position: Option<Position>,
    pub agent: Option<AgentState>,
    pub debris: Option<DebrisState>,
}

#[derive(Debug, Clone, Default)]
pub struct PendingUpdates {
    updates: HashMap<EntityId, EntityUpdate>,
}

impl PendingUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&EntityUpdate> {
        self.updates.get(id)
    }

    pub fn set_position(&mut self, id: &EntityId, position: Position) {
        self.entry(id).position = Some(position);
    }

    pub fn set_agent(&mut self, id: &EntityId, state: AgentState) {
        self.entry(id).agent = Some(state);
    }

    pub fn set_debris(&mut self, id: &EntityId, state: DebrisState) {
        self.entry(id).debris = Some(state);
    }

    /// Effective position of `entity` this tick.
    pub fn position(&self, entity: &Entity) -> Position {
        self.get(&entity.id)
            .and_then(|u| u.position)
            .unwrap_or(entity.position)
    }

    /// Effective agent state, or `None` if `entity` is not an agent.
    pub fn agent_state(&self, entity: &Entity) -> Option<AgentState> {
        let base = entity.agent_state()?;
        Some(
            self.get(&entity.id)
                .and_then(|u| u.agent.clone())
                .unwrap_or_else(|| base.clone()),
        )
    }

    /// Effective debris state, or `None` if `entity` is not debris.
    pub fn debris_state(&self, entity: &Entity) -> Option<DebrisState> {
        let base = entity.debris_state()?;
        Some(
            self.get(&entity.id)
                .and_then(|u| u.debris.clone())
                .unwrap_or_else(|| base.clone()),
        )
    }

    pub(crate) fn into_updates(self) -> impl Iterator<Item = (EntityId, EntityUpdate)> {
        self.updates.into_iter()
    }

    fn entry(&mut self, id: &EntityId) -> &mut EntityUpdate {
        self.updates.entry(id.clone()).or_default()
    }
}
