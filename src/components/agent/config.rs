use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::{
    deg_to_rad, SimError, DEFAULT_ANGULAR_SPEED_DEG, DEFAULT_RECOVERY_MAX, DEFAULT_RECOVERY_MIN,
    DEFAULT_SPEED,
};

/// Bounds of the uniformly drawn recovery duration (s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRange {
    pub min: f64,
    pub max: f64,
}

impl Default for RecoveryRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_RECOVERY_MIN,
            max: DEFAULT_RECOVERY_MAX,
        }
    }
}

impl RecoveryRange {
    pub fn new(min: f64, max: f64) -> Result<Self, SimError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min < 0.0 || self.min > self.max
        {
            return Err(SimError::InvalidConfig(format!(
                "recovery range [{}, {}] must be finite with 0 <= min <= max",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Physical parameters of the motion model.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Linear speed while cruising (units/s).
    pub speed: f64,
    /// Rotation rate while recovering (rad/s).
    pub angular_speed: f64,
    pub recovery: RecoveryRange,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            angular_speed: deg_to_rad(DEFAULT_ANGULAR_SPEED_DEG),
            recovery: RecoveryRange::default(),
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "speed {} must be finite and >= 0",
                self.speed
            )));
        }
        if !self.angular_speed.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "angular speed {} must be finite",
                self.angular_speed
            )));
        }
        self.recovery.validate()
    }
}
