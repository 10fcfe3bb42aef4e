//! Tunable simulation parameters.
//!
//! Every field defaults to the value in `constants.rs`, so a config file
//! only needs to name the options it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::SceneFrame;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Debris closer than this to the asset becomes a threat (km).
    pub threat_range_km: f64,
    /// Power drained while tracking (percent/s at reference speed).
    pub drain_rate: f64,
    /// Power regained while recharging (percent/s at reference speed).
    pub recharge_rate: f64,
    /// Power regained while idle (percent/s at reference speed).
    pub idle_recharge_rate: f64,
    /// Neutralization progress per real second (percent/s).
    pub neutralization_rate: f64,
    /// Idle agents need strictly more power than this to be assigned.
    pub min_engagement_power: f64,
    /// Scene units per km.
    pub scene_scale: f64,
    /// Planet radius (km).
    pub planet_radius_km: f64,
    /// Speed multiplier at which drain/recharge rates apply unscaled.
    pub reference_speed: f64,
    /// Speed multiplier a new engine starts with.
    pub default_speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            threat_range_km: THREAT_DISTANCE_KM,
            drain_rate: ENERGY_DRAIN_RATE,
            recharge_rate: ENERGY_RECHARGE_RATE,
            idle_recharge_rate: ENERGY_RECHARGE_RATE * IDLE_RECHARGE_FACTOR,
            neutralization_rate: NEUTRALIZATION_RATE,
            min_engagement_power: MIN_ENGAGEMENT_POWER,
            scene_scale: SCALE_FACTOR,
            planet_radius_km: EARTH_RADIUS_KM,
            reference_speed: RATE_REFERENCE_SPEED,
            default_speed: SIMULATION_SPEED_DEFAULT,
        }
    }
}

impl SimConfig {
    /// Reject non-finite or out-of-range options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("threat_range_km", self.threat_range_km)?;
        non_negative("drain_rate", self.drain_rate)?;
        non_negative("recharge_rate", self.recharge_rate)?;
        non_negative("idle_recharge_rate", self.idle_recharge_rate)?;
        non_negative("neutralization_rate", self.neutralization_rate)?;
        positive("scene_scale", self.scene_scale)?;
        positive("planet_radius_km", self.planet_radius_km)?;
        positive("reference_speed", self.reference_speed)?;
        non_negative("default_speed", self.default_speed)?;

        finite("min_engagement_power", self.min_engagement_power)?;
        if !(0.0..MAX_POWER).contains(&self.min_engagement_power) {
            return Err(ConfigError::OutOfRange {
                field: "min_engagement_power",
                value: self.min_engagement_power,
                min: 0.0,
                max: MAX_POWER,
            });
        }
        Ok(())
    }

    pub fn scene_frame(&self) -> SceneFrame {
        SceneFrame {
            planet_radius_km: self.planet_radius_km,
            scene_scale: self.scene_scale,
        }
    }

    /// Factor applied to power rates so they track real time at any speed.
    pub fn rate_scale(&self, speed_multiplier: f64) -> f64 {
        speed_multiplier / self.reference_speed
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
