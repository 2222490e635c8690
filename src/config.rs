//! Recognition thresholds.
//!
//! Distances are in surface units, intervals in milliseconds of the host's
//! monotonic clock. Every field has a default, so a config file only needs
//! to name the values it overrides.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_MINIMUM_MOVE: f64 = 10.0;
pub const DEFAULT_MAX_DOUBLE_TAP_DISTANCE: f64 = 20.0;
pub const DEFAULT_MAX_DOUBLE_TAP_INTERVAL_MS: u64 = 300;

/// How much of each pointer's path a session keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryRetention {
    /// First point, last point and sample count.
    #[default]
    Endpoints,
    /// Endpoints plus a bounded window of the most recent samples.
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Dominant-axis travel a one-finger trajectory must exceed to swipe.
    pub minimum_move: f64,
    /// Two taps closer than this may pair into a double tap.
    pub max_double_tap_distance: f64,
    /// Inclusive upper bound on the gap between paired taps.
    pub max_double_tap_interval_ms: u64,
    pub trajectory_retention: TrajectoryRetention,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            minimum_move: DEFAULT_MINIMUM_MOVE,
            max_double_tap_distance: DEFAULT_MAX_DOUBLE_TAP_DISTANCE,
            max_double_tap_interval_ms: DEFAULT_MAX_DOUBLE_TAP_INTERVAL_MS,
            trajectory_retention: TrajectoryRetention::Endpoints,
        }
    }
}

impl GestureConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.minimum_move.is_finite() || self.minimum_move < 0.0 {
            return Err(ConfigError::Validation(
                "minimum_move must be a finite, non-negative distance".into(),
            ));
        }
        if !self.max_double_tap_distance.is_finite() || self.max_double_tap_distance <= 0.0 {
            return Err(ConfigError::Validation(
                "max_double_tap_distance must be a finite distance > 0".into(),
            ));
        }
        if self.max_double_tap_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "max_double_tap_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
