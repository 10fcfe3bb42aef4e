//! Discrete events emitted by the simulation for logging and UI feedback.
//!
//! The core never presents these itself; the `Display` lines are what an
//! external console collaborator prints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;
use crate::types::EntityId;

/// A notable occurrence during one tick, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A debris object escalated from Safe to Threat.
    ThreatDetected { debris: EntityId, distance_km: f64 },
    /// An idle agent claimed an unclaimed threat.
    ThreatLocked {
        debris: EntityId,
        agent: EntityId,
        distance_km: f64,
    },
    /// A tracking agent ran out of power and released its target.
    BatteryDepleted { agent: EntityId, released: EntityId },
    /// A recharging agent reached full power and is available again.
    Recharged { agent: EntityId },
    /// A threat reached full neutralization progress.
    TargetNeutralized { debris: EntityId, agent: EntityId },
}

impl SimEvent {
    pub fn level(&self) -> AlertLevel {
        match self {
            SimEvent::ThreatDetected { .. } => AlertLevel::Critical,
            SimEvent::ThreatLocked { .. } | SimEvent::BatteryDepleted { .. } => AlertLevel::Warning,
            SimEvent::Recharged { .. } | SimEvent::TargetNeutralized { .. } => AlertLevel::Info,
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::ThreatDetected {
                debris,
                distance_km,
            } => write!(f, "[RADAR] {debris} entered threat range at {distance_km:.0} km"),
            SimEvent::ThreatLocked { debris, agent, .. } => {
                write!(f, "[ALERT] {debris} locked by {agent}")
            }
            SimEvent::BatteryDepleted { agent, .. } => {
                write!(f, "[WARN] {agent} battery depleted. Recharging.")
            }
            SimEvent::Recharged { agent } => write!(f, "[SYSTEM] {agent} fully charged. Online."),
            SimEvent::TargetNeutralized { debris, .. } => write!(f, "[SUCCESS] {debris} neutralized."),
        }
    }
}
