//! Simulation configuration.

use crate::{CoreError, CoreResult};

/// Top-level traversal configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the engine and driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Vehicle speed at multiplier `1.0`, in metres per second.
    pub base_speed_mps: f64,

    /// Initial speed multiplier.  Scales `base_speed_mps`; `0.0` holds the
    /// vehicle in place while the engine keeps running.
    pub speed_multiplier: f64,

    /// Seconds per tick for fixed-cadence drivers.  Default: one 60 Hz frame.
    pub step_secs: f64,

    /// Upper bound on ticks a fixed-cadence driver will run before giving up.
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_speed_mps:   10.0,
            speed_multiplier: 1.0,
            step_secs:        1.0 / 60.0,
            max_ticks:        1_000_000,
        }
    }
}

impl SimConfig {
    /// Reject values the engine or drivers cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.base_speed_mps.is_finite() && self.base_speed_mps > 0.0) {
            return Err(CoreError::Config(format!(
                "base_speed_mps must be positive, got {}",
                self.base_speed_mps
            )));
        }
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier >= 0.0) {
            return Err(CoreError::Config(format!(
                "speed_multiplier must be non-negative, got {}",
                self.speed_multiplier
            )));
        }
        if !(self.step_secs.is_finite() && self.step_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "step_secs must be positive, got {}",
                self.step_secs
            )));
        }
        Ok(())
    }
}
