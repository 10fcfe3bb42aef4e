//! Construction-time errors. The tick itself never fails.

use thiserror::Error;

use crate::types::EntityId;

/// A numeric configuration option outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be within [{min}, {max}), got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// A malformed scenario, rejected before the first tick.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("scenario JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entity id must not be empty")]
    EmptyId,

    #[error("duplicate entity id {0}")]
    DuplicateId(EntityId),

    #[error("scenario must contain exactly one asset, found {0}")]
    AssetCount(usize),

    #[error("{id}: orbital elements must be finite")]
    NonFiniteOrbit { id: EntityId },

    #[error("{id}: altitude must not be negative, got {altitude} km")]
    NegativeAltitude { id: EntityId, altitude: f64 },

    #[error("{id}: power must be within [0, 100], got {power}")]
    PowerOutOfRange { id: EntityId, power: f64 },

    #[error("{id}: neutralization progress must be within [0, 100), got {progress}")]
    ProgressOutOfRange { id: EntityId, progress: f64 },

    #[error("{agent} tracks {target}, which is not a debris object")]
    TargetNotDebris { agent: EntityId, target: EntityId },

    #[error("{agent} and {debris} disagree about their claim")]
    ClaimMismatch { agent: EntityId, debris: EntityId },
}
