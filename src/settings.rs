//! Gameplay tunables
//!
//! Provided once when a game is created. Can be loaded from a JSON file so
//! balance tweaks don't need a rebuild.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shot and movement tuning for one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Holder movement speed (units per second)
    pub move_speed: f32,
    /// Drift force applied to shots at or beyond the reference range
    pub max_drift_force: f32,
    /// Drift force applied to point-blank shots
    pub min_drift_force: f32,
    /// Landing closer than this scores a perfect shot
    pub perfect_shot_radius: f32,
    /// Landing closer than this scores a good shot
    pub scoring_radius: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            max_drift_force: 0.5,
            min_drift_force: 0.1,
            perfect_shot_radius: 1.0,
            scoring_radius: 2.0,
        }
    }
}

/// Why a set of tunables was rejected
#[derive(Error, Debug)]
pub enum TunablesError {
    #[error("failed to read tunables: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed tunables JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("move_speed must be >= 0 (got {move_speed})")]
    NegativeMoveSpeed { move_speed: f32 },

    #[error("min_drift_force must be >= 0 (got {min_drift_force})")]
    NegativeDrift { min_drift_force: f32 },

    #[error("min_drift_force {min} exceeds max_drift_force {max}")]
    DriftRangeInverted { min: f32, max: f32 },

    #[error("perfect_shot_radius must be > 0 (got {perfect_shot_radius})")]
    NonPositiveRadius { perfect_shot_radius: f32 },

    #[error("scoring_radius {scoring} must be larger than perfect_shot_radius {perfect}")]
    RadiiNotOrdered { perfect: f32, scoring: f32 },
}

impl Tunables {
    /// Check the ordering constraints the scoring bands and drift range rely on
    pub fn validate(&self) -> Result<(), TunablesError> {
        // Written as negated comparisons so NaN is rejected too
        if !(self.move_speed >= 0.0) {
            return Err(TunablesError::NegativeMoveSpeed {
                move_speed: self.move_speed,
            });
        }
        if !(self.min_drift_force >= 0.0) {
            return Err(TunablesError::NegativeDrift {
                min_drift_force: self.min_drift_force,
            });
        }
        if !(self.max_drift_force >= self.min_drift_force) {
            return Err(TunablesError::DriftRangeInverted {
                min: self.min_drift_force,
                max: self.max_drift_force,
            });
        }
        if !(self.perfect_shot_radius > 0.0) {
            return Err(TunablesError::NonPositiveRadius {
                perfect_shot_radius: self.perfect_shot_radius,
            });
        }
        if !(self.scoring_radius > self.perfect_shot_radius) {
            return Err(TunablesError::RadiiNotOrdered {
                perfect: self.perfect_shot_radius,
                scoring: self.scoring_radius,
            });
        }
        Ok(())
    }

    /// Parse and validate tunables from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TunablesError> {
        let tunables: Self = serde_json::from_str(json)?;
        tunables.validate()?;
        Ok(tunables)
    }

    /// Load tunables from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TunablesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tunables = Self::from_json(&json)?;
        log::info!("Loaded tunables from {}", path.display());
        Ok(tunables)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
