//! Simulation constants and tuning parameters.

// --- Scene ---

/// Mean equatorial planet radius in km.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Scene units per km (1 unit = 1000 km).
pub const SCALE_FACTOR: f64 = 0.001;

// --- Threat detection ---

/// Distance from the asset below which debris is flagged as a threat (km).
pub const THREAT_DISTANCE_KM: f64 = 1500.0;

// --- Agent power ---

/// Upper bound of an agent's power level (percent).
pub const MAX_POWER: f64 = 100.0;

/// Power drained per second while tracking a target (percent/s at reference speed).
pub const ENERGY_DRAIN_RATE: f64 = 15.0;

/// Power regained per second while recharging (percent/s at reference speed).
pub const ENERGY_RECHARGE_RATE: f64 = 5.0;

/// Passive regeneration while idle, as a fraction of the active recharge rate.
pub const IDLE_RECHARGE_FACTOR: f64 = 0.5;

/// An idle agent must hold strictly more power than this to be assigned a threat.
pub const MIN_ENGAGEMENT_POWER: f64 = 10.0;

// --- Neutralization ---

/// Neutralization progress per real second while tracking (percent/s).
pub const NEUTRALIZATION_RATE: f64 = 40.0;

/// Progress value at which a debris object is neutralized (percent).
pub const MAX_PROGRESS: f64 = 100.0;

// --- Time ---

/// Speed multiplier the drain/recharge rates are expressed against.
pub const RATE_REFERENCE_SPEED: f64 = 20.0;

/// Default simulated seconds per real second.
pub const SIMULATION_SPEED_DEFAULT: f64 = 100.0;

// --- Display ---

/// Number of segments used when sampling an orbit path for rendering.
pub const ORBIT_PATH_SAMPLES: usize = 100;
