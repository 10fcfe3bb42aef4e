//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of simulated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The single protected object.
    Asset,
    /// Mobile defender with a power budget.
    Agent,
    /// Orbiting object that may become a threat.
    Debris,
}

/// Agent activity, without the attached target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentStatus {
    #[default]
    Idle,
    Tracking,
    Recharging,
}

/// Debris threat level, without the attached claim and progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebrisStatus {
    #[default]
    Safe,
    Threat,
    Neutralized,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
