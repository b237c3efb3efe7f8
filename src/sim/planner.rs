//! Shot planning
//!
//! At release we roll a lateral drift scaled by distance, and derive flight
//! time and arc height from that same distance. Long shots drift more, but
//! even point-blank shots carry `min_drift_force` of error.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;
use crate::settings::Tunables;

/// Everything needed to fly one shot. Created at release, dropped on landing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    /// Release point (overhead anchor)
    pub start: Vec3,
    /// Hoop position the shot was aimed at
    pub target: Vec3,
    /// Lateral aim error (y is always 0)
    pub drift: Vec3,
    /// Seconds from release to landing (> 0)
    pub flight_duration: f32,
    /// Apex height added on top of the straight line (> 0)
    pub arc_height: f32,
    /// Release-to-target distance the plan was derived from
    pub distance: f32,
}

impl ShotPlan {
    /// Where the ball actually comes down
    #[inline]
    pub fn landing_point(&self) -> Vec3 {
        self.target + self.drift
    }
}

/// Drift force for a shot of the given length, in `[min, max]`
pub fn drift_force(distance: f32, tunables: &Tunables) -> f32 {
    let normalized = (distance / DRIFT_REFERENCE_RANGE).clamp(0.0, 1.0);
    lerp(tunables.min_drift_force, tunables.max_drift_force, normalized)
}

/// Flight time in seconds
#[inline]
pub fn flight_duration(distance: f32) -> f32 {
    MIN_FLIGHT_TIME + distance * FLIGHT_TIME_PER_UNIT
}

/// Apex height of the half-sine arc
#[inline]
pub fn arc_height(distance: f32) -> f32 {
    BASE_ARC_HEIGHT + distance * ARC_HEIGHT_PER_UNIT
}

/// Roll a drift vector: x and z independent and uniform in `[-force, force]`
pub fn roll_drift<R: Rng>(force: f32, rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random_range(-force..=force),
        0.0,
        rng.random_range(-force..=force),
    )
}

/// Plan a shot released from `overhead` toward `target`
pub fn plan<R: Rng>(
    overhead: Vec3,
    target: Vec3,
    tunables: &Tunables,
    rng: &mut R,
) -> ShotPlan {
    assert!(
        overhead.is_finite() && target.is_finite(),
        "shot endpoints must be finite: {overhead} -> {target}"
    );
    assert!(
        tunables.max_drift_force >= tunables.min_drift_force && tunables.min_drift_force >= 0.0,
        "drift range must satisfy max >= min >= 0"
    );

    let distance = overhead.distance(target);
    let force = drift_force(distance, tunables);
    let drift = roll_drift(force, rng);

    let plan = ShotPlan {
        start: overhead,
        target,
        drift,
        flight_duration: flight_duration(distance),
        arc_height: arc_height(distance),
        distance,
    };
    log::debug!(
        "Shot planned: distance={:.2} drift_force={:.3} drift=({:.3}, {:.3}) duration={:.2}s arc={:.2}",
        distance,
        force,
        drift.x,
        drift.z,
        plan.flight_duration,
        plan.arc_height
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reference_range_saturates() {
        // 15 units out with drift 0.1..0.5
        let tunables = Tunables::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let plan = plan(Vec3::ZERO, Vec3::new(0.0, 0.0, 15.0), &tunables, &mut rng);

        assert!((drift_force(15.0, &tunables) - 0.5).abs() < 1e-6);
        assert!((plan.distance - 15.0).abs() < 1e-5);
        assert!((plan.flight_duration - 1.25).abs() < 1e-5);
        assert!((plan.arc_height - 5.0).abs() < 1e-5);
        assert!(plan.drift.x.abs() <= 0.5 && plan.drift.z.abs() <= 0.5);
        assert_eq!(plan.drift.y, 0.0);
    }

    #[test]
    fn test_drift_force_beyond_range_stays_at_max() {
        let tunables = Tunables::default();
        assert_eq!(drift_force(40.0, &tunables), tunables.max_drift_force);
        assert_eq!(drift_force(0.0, &tunables), tunables.min_drift_force);
        assert!((drift_force(7.5, &tunables) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_point_blank_floor() {
        assert_eq!(flight_duration(0.0), MIN_FLIGHT_TIME);
        assert_eq!(arc_height(0.0), BASE_ARC_HEIGHT);
    }

    #[test]
    fn test_zero_drift_range_is_exact() {
        let tunables = Tunables {
            min_drift_force: 0.0,
            max_drift_force: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let plan = plan(Vec3::ZERO, Vec3::new(3.0, 1.0, 4.0), &tunables, &mut rng);
        assert_eq!(plan.drift, Vec3::ZERO);
        assert_eq!(plan.landing_point(), plan.target);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let tunables = Tunables::default();
        let target = Vec3::new(2.0, 3.0, 9.0);
        let a = plan(Vec3::ZERO, target, &tunables, &mut Pcg32::seed_from_u64(42));
        let b = plan(Vec3::ZERO, target, &tunables, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_inverted_drift_range_panics() {
        let tunables = Tunables {
            min_drift_force: 0.9,
            max_drift_force: 0.1,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        plan(Vec3::ZERO, Vec3::Z, &tunables, &mut rng);
    }
}
