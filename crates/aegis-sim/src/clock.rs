//! Simulation clock: simulated time, run flag and speed multiplier.

use aegis_core::types::SimTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    time: SimTime,
    running: bool,
    speed: f64,
}

impl SimClock {
    /// A running clock at t = 0.
    pub fn new(speed: f64) -> Self {
        Self {
            time: SimTime::default(),
            running: true,
            speed: sanitize_speed(speed),
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.time.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Negative or non-finite multipliers become 0.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.speed = sanitize_speed(multiplier);
    }

    /// Simulated seconds a real `delta` covers, or `None` while paused.
    fn step_for(&self, delta: f64) -> Option<f64> {
        self.running.then(|| sanitize_delta(delta) * self.speed)
    }

    /// Advance by a real-time `delta`. Returns the simulated seconds covered.
    pub fn advance(&mut self, delta: f64) -> Option<f64> {
        let step = self.step_for(delta)?;
        self.time.advance(step);
        Some(step)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(aegis_core::constants::SIMULATION_SPEED_DEFAULT)
    }
}

/// Frame deltas that are negative or not finite count as zero.
pub fn sanitize_delta(delta: f64) -> f64 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

/// Negative or non-finite multipliers count as zero. No upper bound.
/// Shared by `SimClock` and the pure `tick`.
pub fn sanitize_speed(multiplier: f64) -> f64 {
    sanitize_delta(multiplier)
}
