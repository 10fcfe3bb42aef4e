//! Systems run once per tick, in order.
//!
//! Each system reads the tick's `EntitySet` snapshot plus whatever earlier
//! systems already proposed, and writes only into `PendingUpdates`. The
//! registry commits the batch after the last system has run.

pub mod agent_power;
pub mod assignment;
pub mod propagation;
pub mod snapshot;
pub mod threat_detection;

use aegis_core::config::SimConfig;
use aegis_core::types::SceneFrame;

/// Inputs shared by every system for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// Simulated time after this tick's advance (seconds).
    pub time_secs: f64,
    /// Real-time frame delta (seconds).
    pub delta: f64,
    /// Simulated seconds per real second.
    pub speed: f64,
    pub config: &'a SimConfig,
    pub frame: SceneFrame,
}

impl<'a> TickContext<'a> {
    pub fn new(time_secs: f64, delta: f64, speed: f64, config: &'a SimConfig) -> Self {
        Self {
            time_secs,
            delta,
            speed,
            config,
            frame: config.scene_frame(),
        }
    }

    /// `speed / reference_speed`. Power rates apply to `delta` times this factor.
    pub fn power_scale(&self) -> f64 {
        self.config.rate_scale(self.speed)
    }
}
