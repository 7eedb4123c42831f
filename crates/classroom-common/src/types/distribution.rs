//! Learning speed distribution
//!
//! Students' learning speeds are drawn from a normal distribution and
//! floored at a minimum speed so no student ends up with a non-physical
//! zero or negative speed.

use serde::{Deserialize, Serialize};

use crate::error::DistributionError;

/// Default mean learning speed
pub const DEFAULT_MEAN_SPEED: f64 = 1.1;

/// Default learning speed standard deviation
pub const DEFAULT_STD_DEV_SPEED: f64 = 0.25;

/// Floor applied to every drawn speed
pub const DEFAULT_MIN_SPEED: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min_speed: f64,
}

impl Default for SpeedDistribution {
    fn default() -> Self {
        Self {
            mean: DEFAULT_MEAN_SPEED,
            std_dev: DEFAULT_STD_DEV_SPEED,
            min_speed: DEFAULT_MIN_SPEED,
        }
    }
}

impl SpeedDistribution {
    pub fn new(mean: f64, std_dev: f64, min_speed: f64) -> Result<Self, DistributionError> {
        let dist = Self {
            mean,
            std_dev,
            min_speed,
        };
        dist.validate()?;
        Ok(dist)
    }

    /// Check a distribution that may have come from deserialization
    pub fn validate(&self) -> Result<(), DistributionError> {
        if !self.mean.is_finite() {
            return Err(DistributionError::InvalidMean(self.mean));
        }
        if !(self.std_dev.is_finite() && self.std_dev > 0.0) {
            return Err(DistributionError::InvalidStdDev(self.std_dev));
        }
        if !(self.min_speed.is_finite() && self.min_speed > 0.0) {
            return Err(DistributionError::InvalidMinSpeed(self.min_speed));
        }
        Ok(())
    }
}
