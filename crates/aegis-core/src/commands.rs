//! Control commands sent from a driver or UI to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible simulation control actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Freeze simulated time.
    Pause,
    /// Continue from the frozen time.
    Resume,
    /// Flip between running and paused.
    TogglePlay,
    /// Set simulated seconds per real second (negative or NaN becomes 0).
    SetSpeed { multiplier: f64 },
}
