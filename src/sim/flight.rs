//! Ball flight along a planned shot, and landing evaluation
//!
//! The path is a straight line from release to landing point with a
//! half-sine bump added on the vertical axis:
//!
//! ```text
//! pos(t) = lerp(start, target + drift, t) + up * arc_height * sin(t * PI)
//! ```

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::planner::ShotPlan;
use crate::settings::Tunables;

/// Ball position at a point in a flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    pub position: Vec3,
    /// Normalized flight progress, clamped to [0, 1]
    pub t01: f32,
    /// True once elapsed time has reached the planned duration
    pub complete: bool,
}

/// Height of the arc above the straight line at progress `t01`
#[inline]
pub fn arc_offset(arc_height: f32, t01: f32) -> f32 {
    arc_height * (t01 * PI).sin()
}

/// Sample the flight `elapsed` seconds after release
pub fn advance(plan: &ShotPlan, elapsed: f32) -> FlightSample {
    let ratio = elapsed / plan.flight_duration;
    let t01 = ratio.clamp(0.0, 1.0);
    // sin(PI) isn't exactly zero in f32; pin the endpoint so landings are exact
    let arc = if t01 >= 1.0 {
        0.0
    } else {
        arc_offset(plan.arc_height, t01)
    };
    let position = plan.start.lerp(plan.landing_point(), t01) + Vec3::Y * arc;

    FlightSample {
        position,
        t01,
        complete: ratio >= 1.0,
    }
}

/// Scoring band a landing falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Perfect,
    Good,
    Miss,
}

impl Outcome {
    /// Classify a landing by its distance from the hoop. Bands are half-open,
    /// so a landing exactly on a radius falls outside it.
    pub fn from_distance(distance: f32, tunables: &Tunables) -> Self {
        if distance < tunables.perfect_shot_radius {
            Outcome::Perfect
        } else if distance < tunables.scoring_radius {
            Outcome::Good
        } else {
            Outcome::Miss
        }
    }

    /// Points awarded for this outcome
    pub fn points(&self) -> u32 {
        match self {
            Outcome::Perfect => 2,
            Outcome::Good => 1,
            Outcome::Miss => 0,
        }
    }

    pub fn is_score(&self) -> bool {
        !matches!(self, Outcome::Miss)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Perfect => "Perfect Shot!",
            Outcome::Good => "Good Shot!",
            Outcome::Miss => "Miss",
        }
    }
}

/// Evaluate where the ball came down relative to the hoop
pub fn evaluate_outcome(final_position: Vec3, target: Vec3, tunables: &Tunables) -> Outcome {
    Outcome::from_distance(final_position.distance(target), tunables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> ShotPlan {
        ShotPlan {
            start: Vec3::new(0.0, 2.0, 0.0),
            target: Vec3::new(0.0, 3.0, 10.0),
            drift: Vec3::new(0.25, 0.0, -0.25),
            flight_duration: 1.0,
            arc_height: 4.0,
            distance: 10.05,
        }
    }

    #[test]
    fn test_advance_endpoints() {
        let plan = test_plan();

        let start = advance(&plan, 0.0);
        assert_eq!(start.position, plan.start);
        assert_eq!(start.t01, 0.0);
        assert!(!start.complete);

        let end = advance(&plan, 1.0);
        assert!(end.complete);
        assert_eq!(end.t01, 1.0);
        assert!(end.position.distance(plan.landing_point()) < 1e-6);
    }

    #[test]
    fn test_advance_apex_at_half() {
        let plan = test_plan();
        let mid = advance(&plan, 0.5);
        let straight = plan.start.lerp(plan.landing_point(), 0.5);
        assert!((mid.position.y - straight.y - plan.arc_height).abs() < 1e-5);
        assert!(!mid.complete);
    }

    #[test]
    fn test_overshoot_lands_on_landing_point() {
        let plan = test_plan();
        let late = advance(&plan, 1.3);
        assert!(late.complete);
        assert_eq!(late.t01, 1.0);
        assert!(late.position.distance(plan.landing_point()) < 1e-6);
    }

    #[test]
    fn test_arc_offset_shape() {
        assert_eq!(arc_offset(5.0, 0.0), 0.0);
        assert!(arc_offset(5.0, 1.0).abs() < 1e-5);
        assert!((arc_offset(5.0, 0.5) - 5.0).abs() < 1e-6);
        assert!(arc_offset(5.0, 0.25) < arc_offset(5.0, 0.5));
    }

    #[test]
    fn test_scoring_bands() {
        let tunables = Tunables {
            perfect_shot_radius: 1.0,
            scoring_radius: 2.0,
            ..Default::default()
        };
        assert_eq!(Outcome::from_distance(0.5, &tunables), Outcome::Perfect);
        assert_eq!(Outcome::from_distance(1.5, &tunables), Outcome::Good);
        assert_eq!(Outcome::from_distance(3.0, &tunables), Outcome::Miss);
        assert_eq!(Outcome::Perfect.points(), 2);
        assert_eq!(Outcome::Good.points(), 1);
        assert!(!Outcome::Miss.is_score());
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        let tunables = Tunables {
            perfect_shot_radius: 1.0,
            scoring_radius: 2.0,
            ..Default::default()
        };
        assert_eq!(Outcome::from_distance(1.0, &tunables), Outcome::Good);
        assert_eq!(Outcome::from_distance(2.0, &tunables), Outcome::Miss);
        assert_eq!(Outcome::from_distance(0.0, &tunables), Outcome::Perfect);
    }

    #[test]
    fn test_evaluate_outcome_uses_3d_distance() {
        let tunables = Tunables::default();
        let hoop = Vec3::new(0.0, 3.0, 10.0);
        assert_eq!(
            evaluate_outcome(hoop + Vec3::new(0.0, 1.5, 0.0), hoop, &tunables),
            Outcome::Good
        );
    }
}
