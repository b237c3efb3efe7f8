//! Hoop Shot - an arcade basketball shooting loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shot planning, ball flight, round state)
//! - `settings`: Gameplay tunables and their JSON loader
//! - `hud`: Score text shown by the UI layer

pub mod hud;
pub mod settings;
pub mod sim;

pub use settings::{Tunables, TunablesError};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Distance at which drift force saturates at its maximum
    pub const DRIFT_REFERENCE_RANGE: f32 = 15.0;

    /// Flight time floor for point-blank shots (seconds)
    pub const MIN_FLIGHT_TIME: f32 = 0.5;
    /// Extra flight time per unit of distance (seconds)
    pub const FLIGHT_TIME_PER_UNIT: f32 = 0.05;

    /// Apex height of a point-blank shot
    pub const BASE_ARC_HEIGHT: f32 = 2.0;
    /// Extra apex height per unit of distance
    pub const ARC_HEIGHT_PER_UNIT: f32 = 0.2;

    /// Dribble bounce frequency (radians per second)
    pub const DRIBBLE_FREQUENCY: f32 = 5.0;
    /// Dribble bounce amplitude
    pub const DRIBBLE_HEIGHT: f32 = 1.0;
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Drop the vertical component of a world-space vector
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Heading angle (radians around +Y) of a horizontal direction, 0 = facing +Z
#[inline]
pub fn yaw_of(dir: Vec3) -> f32 {
    dir.x.atan2(dir.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.1, 0.5, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.5, 1.0), 0.5);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_of_axes() {
        assert!(yaw_of(Vec3::Z).abs() < 1e-6);
        assert!((yaw_of(Vec3::X) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
