//! Caller-supplied initial scenario and its construction-time validation.
//!
//! Scenario content (counts, placement, naming) is produced outside the core;
//! this module only checks that the data is well formed before the first tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::{AgentActivity, DebrisState};
use crate::constants::{MAX_POWER, MAX_PROGRESS};
use crate::error::ScenarioError;
use crate::state::{Entity, EntityBody, EntitySet};
use crate::types::EntityId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub entities: Vec<Entity>,
}

impl Scenario {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail fast on anything the tick could not handle consistently.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let mut seen: HashMap<&EntityId, &Entity> = HashMap::with_capacity(self.entities.len());
        let mut asset_count = 0;

        for entity in &self.entities {
            if entity.id.as_str().is_empty() {
                return Err(ScenarioError::EmptyId);
            }
            if seen.insert(&entity.id, entity).is_some() {
                return Err(ScenarioError::DuplicateId(entity.id.clone()));
            }
            if !entity.orbit.is_finite() {
                return Err(ScenarioError::NonFiniteOrbit {
                    id: entity.id.clone(),
                });
            }
            if entity.orbit.altitude < 0.0 {
                return Err(ScenarioError::NegativeAltitude {
                    id: entity.id.clone(),
                    altitude: entity.orbit.altitude,
                });
            }

            match &entity.body {
                EntityBody::Asset => asset_count += 1,
                EntityBody::Agent { state } => {
                    if !(0.0..=MAX_POWER).contains(&state.power) {
                        return Err(ScenarioError::PowerOutOfRange {
                            id: entity.id.clone(),
                            power: state.power,
                        });
                    }
                }
                EntityBody::Debris { state } => {
                    if let Some(progress) = state.progress() {
                        if !(0.0..MAX_PROGRESS).contains(&progress) {
                            return Err(ScenarioError::ProgressOutOfRange {
                                id: entity.id.clone(),
                                progress,
                            });
                        }
                    }
                }
            }
        }

        if asset_count != 1 {
            return Err(ScenarioError::AssetCount(asset_count));
        }

        check_claims(&self.entities, &seen)
    }

    /// Validate and wrap into the registry's input set.
    pub fn into_entity_set(self) -> Result<EntitySet, ScenarioError> {
        self.validate()?;
        Ok(EntitySet::from_entities(self.entities))
    }
}

/// Tracking targets and debris claims must reference each other.
fn check_claims(
    entities: &[Entity],
    by_id: &HashMap<&EntityId, &Entity>,
) -> Result<(), ScenarioError> {
    for entity in entities {
        match &entity.body {
            EntityBody::Agent { state } => {
                let AgentActivity::Tracking { target } = &state.activity else {
                    continue;
                };
                let target_state = by_id
                    .get(target)
                    .and_then(|t| t.debris_state())
                    .ok_or_else(|| ScenarioError::TargetNotDebris {
                        agent: entity.id.clone(),
                        target: target.clone(),
                    })?;
                if target_state.claimed_by() != Some(&entity.id) {
                    return Err(ScenarioError::ClaimMismatch {
                        agent: entity.id.clone(),
                        debris: target.clone(),
                    });
                }
            }
            EntityBody::Debris {
                state:
                    DebrisState::Threat {
                        claimed_by: Some(agent),
                        ..
                    },
            } => {
                let agent_target = by_id
                    .get(agent)
                    .and_then(|a| a.agent_state())
                    .and_then(|s| s.target());
                if agent_target != Some(&entity.id) {
                    return Err(ScenarioError::ClaimMismatch {
                        agent: agent.clone(),
                        debris: entity.id.clone(),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}
