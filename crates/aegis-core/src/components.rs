//! ECS components for hecs entities.
//!
//! Kind-specific state is modelled as tagged variants so that illegal
//! combinations (a recharging agent holding a target, progress on a safe
//! debris) cannot be represented. Transition logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentStatus, DebrisStatus};
use crate::types::EntityId;

/// Marks the protected asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asset;

/// Marks a defender agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent;

/// Marks a debris object.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris;

/// What an agent is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum AgentActivity {
    /// Available for assignment; regenerates power passively.
    #[default]
    Idle,
    /// Draining power to neutralize the claimed debris.
    Tracking { target: EntityId },
    /// Out of service until power is full again.
    Recharging,
}

/// Power budget and activity of a defender agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    /// Power level in percent, always within [0, 100].
    pub power: f64,
    pub activity: AgentActivity,
}

impl AgentState {
    pub fn idle(power: f64) -> Self {
        Self {
            power,
            activity: AgentActivity::Idle,
        }
    }

    pub fn status(&self) -> AgentStatus {
        match self.activity {
            AgentActivity::Idle => AgentStatus::Idle,
            AgentActivity::Tracking { .. } => AgentStatus::Tracking,
            AgentActivity::Recharging => AgentStatus::Recharging,
        }
    }

    /// The debris this agent is tracking, if any.
    pub fn target(&self) -> Option<&EntityId> {
        match &self.activity {
            AgentActivity::Tracking { target } => Some(target),
            _ => None,
        }
    }
}

/// Threat state of a debris object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum DebrisState {
    /// Outside the threat envelope so far.
    #[default]
    Safe,
    /// Inside (or once inside) the threat envelope. Progress survives a released claim.
    Threat {
        #[serde(default)]
        claimed_by: Option<EntityId>,
        #[serde(default)]
        progress: f64,
    },
    /// Terminal. Kept for display and record.
    Neutralized,
}

impl DebrisState {
    /// A freshly escalated threat with no claim and no progress.
    pub fn new_threat() -> Self {
        DebrisState::Threat {
            claimed_by: None,
            progress: 0.0,
        }
    }

    pub fn status(&self) -> DebrisStatus {
        match self {
            DebrisState::Safe => DebrisStatus::Safe,
            DebrisState::Threat { .. } => DebrisStatus::Threat,
            DebrisState::Neutralized => DebrisStatus::Neutralized,
        }
    }

    /// The agent claiming this debris, if any.
    pub fn claimed_by(&self) -> Option<&EntityId> {
        match self {
            DebrisState::Threat { claimed_by, .. } => claimed_by.as_ref(),
            _ => None,
        }
    }

    /// Neutralization progress; only defined for threats.
    pub fn progress(&self) -> Option<f64> {
        match self {
            DebrisState::Threat { progress, .. } => Some(*progress),
            _ => None,
        }
    }
}
